//! `risk-fillr` — derive road-risk assessment form values from external signals.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load provider config ([`config::load_config`]).
//! 3. Resolve the evaluation clock (`--at` override or local time).
//! 4. Gather raw signals: license text ([`provider::ocr`] or a local file),
//!    route ([`provider::directions`]) and weather ([`provider::weather`])
//!    fetched concurrently; `--mock` substitutes canned fixtures.
//! 5. Run the pure classifiers ([`classify`]) over whatever arrived.
//! 6. Assemble the [`models::FormProfile`] and render it ([`report`]).
//!
//! A provider failure degrades to a warning — that form section is left for
//! manual entry. The run only fails when no requested signal could be
//! gathered at all.

mod classify;
mod cli;
mod config;
mod models;
mod provider;
mod report;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use classify::dates::Clock;
use classify::{license, route, temporal, vehicle, weather};
use cli::{Cli, ReportFormat};
use config::load_config;
use models::{FormProfile, RouteProfile, RouteSample, WeatherProfile, WeatherSample};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let clock = match cli.at.as_deref() {
        Some(s) => Clock::parse_override(s).map_err(|e| anyhow!(e))?,
        None => Clock::now(),
    };

    let wants_license = cli.license.is_some() || cli.license_text.is_some() || cli.mock;
    let wants_route = (cli.from.is_some() && cli.to.is_some()) || cli.mock;
    let wants_weather = (cli.from.is_some() && !cli.no_weather) || cli.mock;

    if !wants_license && !wants_route && !wants_weather && cli.vehicle_class.is_none() {
        bail!("nothing to derive: pass --license/--license-text, --from/--to, or --mock");
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.network.timeout_secs))
        .build()?;

    let uses_network = !cli.mock
        && (cli.license.is_some() || (cli.from.is_some() && (cli.to.is_some() || !cli.no_weather)));

    let spinner = if uses_network && !cli.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message("Fetching signals...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    // License text arrives synchronously (local file or one upload); route
    // and weather are independent lookups and run concurrently.
    let ocr_text = gather_license_text(&cli, &client, &config).await;

    let route_sample = gather_route(&cli, &client, &config);
    let weather_sample = gather_weather(&cli, &client, &config);
    let (route_sample, weather_sample) = futures::join!(route_sample, weather_sample);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let requested = [wants_license, wants_route, wants_weather]
        .iter()
        .filter(|w| **w)
        .count();
    let gathered = [
        ocr_text.is_some(),
        route_sample.is_some(),
        weather_sample.is_some(),
    ]
    .iter()
    .filter(|g| **g)
    .count();

    if requested > 0 && gathered == 0 && cli.vehicle_class.is_none() {
        bail!("no signals could be gathered; form must be filled manually");
    }

    let driver = ocr_text.map(|text| license::parse_license_text(&text, clock.today));
    let vehicle_override = cli
        .vehicle_class
        .as_deref()
        .map(vehicle::classify_vehicle_code);

    let profile = FormProfile {
        driver,
        vehicle_override,
        route: route_sample.map(|sample| RouteProfile {
            conditions: route::classify_route(&sample, clock.hour),
            sample,
        }),
        weather: weather_sample.map(|sample| WeatherProfile {
            conditions: weather::classify_weather(&sample, clock.hour),
            sample,
        }),
        temporal: temporal::temporal_conditions(&clock),
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&profile, cli.verbose, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
    }

    Ok(())
}

/// Resolve the raw license text: a pre-extracted dump, an OCR upload, or
/// the mock fixture. Provider failures warn and return `None`.
async fn gather_license_text(
    cli: &Cli,
    client: &reqwest::Client,
    config: &config::Config,
) -> Option<String> {
    if let Some(path) = &cli.license_text {
        return match std::fs::read_to_string(path)
            .with_context(|| format!("reading OCR text {}", path.display()))
        {
            Ok(text) => Some(text),
            Err(err) => {
                warn(&format!("license text unavailable: {:#}", err));
                None
            }
        };
    }

    if let Some(path) = &cli.license {
        let upload = match provider::ocr::read_image(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn(&format!("license photo rejected: {:#}", err));
                return None;
            }
        };
        return match provider::ocr::fetch_text(client, &config.providers.ocr, upload).await {
            Ok(text) => Some(text),
            Err(err) => {
                warn(&format!("OCR failed: {:#}", err));
                None
            }
        };
    }

    if cli.mock {
        return Some(provider::mock::license_text());
    }

    None
}

async fn gather_route(
    cli: &Cli,
    client: &reqwest::Client,
    config: &config::Config,
) -> Option<RouteSample> {
    if cli.mock {
        return Some(provider::mock::route());
    }

    let (from, to) = (cli.from?, cli.to?);
    match provider::directions::fetch_route(client, &config.providers.directions, from, to).await
    {
        Ok(sample) => Some(sample),
        Err(err) => {
            warn(&format!("route lookup failed: {:#}", err));
            None
        }
    }
}

async fn gather_weather(
    cli: &Cli,
    client: &reqwest::Client,
    config: &config::Config,
) -> Option<WeatherSample> {
    if cli.mock {
        return Some(provider::mock::weather());
    }
    if cli.no_weather {
        return None;
    }

    let at = cli.from?;
    match provider::weather::fetch_current(
        client,
        &config.providers.weather,
        &config.network,
        at,
    )
    .await
    {
        Ok(sample) => Some(sample),
        Err(err) => {
            warn(&format!("weather lookup failed: {:#}", err));
            None
        }
    }
}

fn warn(message: &str) {
    eprintln!("  {} {}", "⚠".yellow(), message);
}
