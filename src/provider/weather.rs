use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;

use super::send_with_retry;
use crate::config::{NetworkConfig, WeatherProviderConfig};
use crate::models::{Coordinates, WeatherSample};

/// Fetch the current conditions nearest to `at`.
///
/// The weather endpoint is the flakiest of the three providers, so this is
/// the one call wrapped in capped exponential backoff.
pub async fn fetch_current(
    client: &Client,
    cfg: &WeatherProviderConfig,
    network: &NetworkConfig,
    at: Coordinates,
) -> Result<WeatherSample> {
    let url = format!(
        "{}/{},{}?format=j1",
        cfg.url.trim_end_matches('/'),
        at.lat,
        at.lon
    );

    let response = send_with_retry(|| client.get(&url), network.retries).await?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "weather provider returned HTTP {}",
            response.status()
        ));
    }

    let data: Value = response.json().await?;
    parse_current(&data).ok_or_else(|| anyhow!("weather provider returned no current conditions"))
}

/// Pull the first `current_condition` entry out of the provider payload.
pub(crate) fn parse_current(data: &Value) -> Option<WeatherSample> {
    let current = data.get("current_condition")?.as_array()?.first()?;

    // Numeric fields arrive as strings in this payload.
    let num = |key: &str| -> Option<f64> {
        current.get(key).and_then(|v| match v {
            Value::String(s) => s.trim().parse().ok(),
            other => other.as_f64(),
        })
    };

    let condition_text = current
        .get("weatherDesc")
        .and_then(Value::as_array)
        .and_then(|descs| descs.first())
        .and_then(|desc| desc.get("value"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let area_name = data
        .get("nearest_area")
        .and_then(Value::as_array)
        .and_then(|areas| areas.first())
        .and_then(|area| area.get("areaName"))
        .and_then(Value::as_array)
        .and_then(|names| names.first())
        .and_then(|name| name.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(WeatherSample {
        condition_text,
        cloud_cover_pct: num("cloudcover"),
        // Provider reports kilometres.
        visibility_meters: num("visibility").map(|km| km * 1000.0),
        precipitation_1h: num("precipMM"),
        // No snow-depth field in this payload; the classifier catches snow
        // from the condition text.
        is_snow: false,
        temp_c: num("temp_C"),
        feels_like_c: num("FeelsLikeC"),
        humidity_pct: num("humidity"),
        pressure_hpa: num("pressure"),
        wind_speed_kmph: num("windspeedKmph"),
        area_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> Value {
        serde_json::json!({
            "current_condition": [{
                "weatherDesc": [{ "value": "Light rain" }],
                "temp_C": "24",
                "FeelsLikeC": "26",
                "humidity": "85",
                "pressure": "1010",
                "visibility": "3",
                "cloudcover": "90",
                "windspeedKmph": "12",
                "precipMM": "0.4"
            }],
            "nearest_area": [{
                "areaName": [{ "value": "Mumbai" }]
            }]
        })
    }

    #[test]
    fn test_parse_current_full_payload() {
        let sample = parse_current(&payload()).unwrap();
        assert_eq!(sample.condition_text, "Light rain");
        assert_eq!(sample.cloud_cover_pct, Some(90.0));
        assert_eq!(sample.visibility_meters, Some(3000.0));
        assert_eq!(sample.precipitation_1h, Some(0.4));
        assert_eq!(sample.temp_c, Some(24.0));
        assert_eq!(sample.wind_speed_kmph, Some(12.0));
        assert_eq!(sample.area_name.as_deref(), Some("Mumbai"));
        assert!(!sample.is_snow);
    }

    #[test]
    fn test_parse_current_missing_fields() {
        let sample = parse_current(&serde_json::json!({
            "current_condition": [{ "weatherDesc": [{ "value": "Sunny" }] }]
        }))
        .unwrap();
        assert_eq!(sample.condition_text, "Sunny");
        assert_eq!(sample.cloud_cover_pct, None);
        assert_eq!(sample.visibility_meters, None);
        assert_eq!(sample.area_name, None);
    }

    #[test]
    fn test_parse_current_rejects_empty_payload() {
        assert!(parse_current(&serde_json::json!({})).is_none());
        assert!(parse_current(&serde_json::json!({ "current_condition": [] })).is_none());
    }
}
