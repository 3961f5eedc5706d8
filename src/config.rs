use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.risk-fillr/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Upstream provider endpoints and credentials.
    pub providers: ProvidersConfig,
    /// Shared HTTP behaviour.
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersConfig {
    pub ocr: OcrProviderConfig,
    pub directions: DirectionsProviderConfig,
    pub weather: WeatherProviderConfig,
}

/// The OCR provider needs a RapidAPI key; there is no keyless fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrProviderConfig {
    pub url: String,
    pub key: String,
    pub host: String,
}

impl Default for OcrProviderConfig {
    fn default() -> Self {
        OcrProviderConfig {
            url: "https://ocr-extract-text.p.rapidapi.com/ocr".to_string(),
            key: String::new(),
            host: "ocr-extract-text.p.rapidapi.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectionsProviderConfig {
    pub url: String,
    pub key: String,
    pub host: String,
}

impl Default for DirectionsProviderConfig {
    fn default() -> Self {
        DirectionsProviderConfig {
            url: "https://trueway-directions2.p.rapidapi.com/FindDrivingRoute".to_string(),
            key: String::new(),
            host: "trueway-directions2.p.rapidapi.com".to_string(),
        }
    }
}

/// The weather provider is keyless.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherProviderConfig {
    pub url: String,
}

impl Default for WeatherProviderConfig {
    fn default() -> Self {
        WeatherProviderConfig {
            url: "https://wttr.in".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub timeout_secs: u64,
    /// Attempt count for the backoff-wrapped weather call.
    pub retries: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            timeout_secs: 15,
            retries: 3,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.risk-fillr/config.toml`
/// 3. `~/.config/risk-fillr/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Classification thresholds are deliberately not configurable; only
/// provider endpoints, credentials, and network behaviour live here.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = Path::new(".risk-fillr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("risk-fillr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.providers.ocr.url.contains("ocr"));
        assert!(config.providers.ocr.key.is_empty());
        assert_eq!(config.providers.weather.url, "https://wttr.in");
        assert_eq!(config.network.timeout_secs, 15);
        assert_eq!(config.network.retries, 3);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [providers.ocr]
            key = "abc123"

            [network]
            retries = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.providers.ocr.key, "abc123");
        // Unset fields inside a present section still default.
        assert!(config.providers.ocr.url.contains("rapidapi"));
        assert_eq!(config.network.retries, 5);
        assert_eq!(config.network.timeout_secs, 15);
        // Untouched sections default wholesale.
        assert_eq!(config.providers.weather.url, "https://wttr.in");
    }

    #[test]
    fn test_load_config_override_path() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            "[providers.weather]\nurl = \"https://weather.example\""
        )
        .unwrap();

        let config = load_config(Some(f.path())).unwrap();
        assert_eq!(config.providers.weather.url, "https://weather.example");
    }

    #[test]
    fn test_load_config_missing_override_errors() {
        assert!(load_config(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
