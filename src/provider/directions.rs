use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::config::DirectionsProviderConfig;
use crate::models::{Coordinates, RouteSample, RouteSegment};

/// Fetch a driving route between two points.
pub async fn fetch_route(
    client: &Client,
    cfg: &DirectionsProviderConfig,
    from: Coordinates,
    to: Coordinates,
) -> Result<RouteSample> {
    let stops = format!("{},{};{},{}", from.lat, from.lon, to.lat, to.lon);

    let response = client
        .get(&cfg.url)
        .query(&[("stops", stops.as_str())])
        .header("x-rapidapi-key", &cfg.key)
        .header("x-rapidapi-host", &cfg.host)
        .send()
        .await
        .context("reaching the directions provider")?;

    let status = response.status();
    match status.as_u16() {
        429 => bail!("directions provider rate limit reached; try again later or use --mock"),
        403 => bail!("directions provider rejected the API key; check [providers.directions] in the config"),
        _ if !status.is_success() => bail!("directions provider returned HTTP {}", status),
        _ => {}
    }

    let data: Value = response.json().await?;
    Ok(parse_route(&data))
}

/// Flatten the provider payload into a [`RouteSample`]. Total: anything
/// missing defaults to zero or empty, and the classifier handles the rest.
pub(crate) fn parse_route(data: &Value) -> RouteSample {
    let route = data.get("route").unwrap_or(&Value::Null);

    // Provider units: meters and seconds.
    let distance_km = route.get("distance").and_then(Value::as_f64).unwrap_or(0.0) / 1000.0;
    let duration_min = route.get("duration").and_then(Value::as_f64).unwrap_or(0.0) / 60.0;
    let summary = route
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let segments = route
        .get("legs")
        .and_then(Value::as_array)
        .and_then(|legs| legs.first())
        .and_then(|leg| leg.get("steps"))
        .and_then(Value::as_array)
        .map(|steps| {
            steps
                .iter()
                .map(|step| RouteSegment {
                    instruction: step
                        .get("instruction")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    road_name: step
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    RouteSample {
        distance_km,
        duration_min,
        summary,
        segments,
    }
}
