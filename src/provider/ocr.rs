use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::OcrProviderConfig;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Read a license photo and check it is something the OCR provider will
/// accept: a decodable JPG or PNG under 5 MB.
pub fn read_image(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading license photo {}", path.display()))?;

    if bytes.len() > MAX_IMAGE_BYTES {
        bail!("license photo must be smaller than 5 MB");
    }

    match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Png) | Ok(image::ImageFormat::Jpeg) => Ok(bytes),
        _ => bail!("license photo must be a JPG or PNG image"),
    }
}

/// Upload the photo and return the raw extracted text.
pub async fn fetch_text(
    client: &Client,
    cfg: &OcrProviderConfig,
    image_bytes: Vec<u8>,
) -> Result<String> {
    let part = Part::bytes(image_bytes).file_name("license.jpg");
    let form = Form::new().part("image", part);

    let response = client
        .post(&cfg.url)
        .header("x-rapidapi-key", &cfg.key)
        .header("x-rapidapi-host", &cfg.host)
        .multipart(form)
        .send()
        .await
        .context("reaching the OCR provider")?;

    let status = response.status();
    match status.as_u16() {
        429 => bail!("OCR provider rate limit reached; wait for the quota to reset or use --mock"),
        403 => bail!("OCR provider rejected the API key; check [providers.ocr] in the config"),
        404 => bail!("OCR endpoint not found; the provider may have moved"),
        _ if !status.is_success() => bail!("OCR provider returned HTTP {}", status),
        _ => {}
    }

    let data: serde_json::Value = response.json().await?;

    // Last resort: hand the whole payload to the parser, which shrugs off
    // anything it cannot match.
    let text = extract_text_field(&data).unwrap_or_else(|| data.to_string());

    if text.trim().len() < 10 {
        bail!("no text extracted from the image; upload a clearer photo");
    }

    Ok(text)
}

/// The text blob lands under a different key depending on the provider
/// plan: try each known location in turn.
pub(crate) fn extract_text_field(data: &serde_json::Value) -> Option<String> {
    for key in ["text", "result", "extracted_text", "data"] {
        if let Some(s) = data.get(key).and_then(|v| v.as_str()) {
            if !s.is_empty() {
                return Some(s.to_string());
            }
        }
    }
    None
}
