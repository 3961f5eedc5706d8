//! Async HTTP clients for the three upstream signal providers.
//!
//! Each module exposes a single fetch function that takes a shared
//! [`reqwest::Client`] plus its provider config and returns the raw sample
//! for the classifiers. Payload parsing lives in pure helpers so the
//! response shapes stay unit-testable without a network.
//!
//! [`mock`] carries canned fixtures for `--mock` runs.

pub mod directions;
pub mod mock;
pub mod ocr;
pub mod weather;

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{RequestBuilder, Response};

/// Send a request, retrying transport errors and 5xx responses with capped
/// exponential backoff (1s, 2s, 4s, … capped at 5s). Non-5xx responses are
/// returned as-is for the caller to interpret.
pub(crate) async fn send_with_retry<F>(make_request: F, retries: u32) -> Result<Response>
where
    F: Fn() -> RequestBuilder,
{
    let mut last_error = anyhow!("no request attempts were made");

    for attempt in 0..retries.max(1) {
        if attempt > 0 {
            let delay = Duration::from_millis((1000u64 << (attempt - 1)).min(5000));
            tokio::time::sleep(delay).await;
        }

        match make_request().send().await {
            Ok(response) if response.status().is_server_error() => {
                last_error = anyhow!("provider returned HTTP {}", response.status());
            }
            Ok(response) => return Ok(response),
            Err(err) => last_error = anyhow!(err),
        }
    }

    Err(last_error)
}
