//! Label image acquisition
//!
//! Loads a label photo from a local path or fetches it over HTTP. All image
//! and network failures stay in this layer; callers hand the extraction core
//! text only.

use std::path::Path;

use anyhow::{Context, Result};
use futures_util::StreamExt;
use image::DynamicImage;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::config::FetchSettings;

/// Load a label image from a local file
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("Failed to load image: {:?}", path))
}

/// Fetch a label image from a URL and decode it.
///
/// Downloads are capped at `settings.max_image_bytes`; anything larger is
/// rejected rather than buffered.
pub fn fetch_image(url: &str, settings: &FetchSettings) -> Result<DynamicImage> {
    // Create a tokio runtime for the async download
    let rt = Runtime::new().context("Failed to create tokio runtime")?;

    let bytes = rt.block_on(fetch_bytes_async(url, settings))?;

    image::load_from_memory(&bytes)
        .with_context(|| format!("Response from {} is not a decodable image", url))
}

/// Async download implementation
async fn fetch_bytes_async(url: &str, settings: &FetchSettings) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch image from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Image fetch failed with status {}: {}", response.status(), url);
    }

    if let Some(len) = response.content_length() {
        if len > settings.max_image_bytes {
            anyhow::bail!(
                "Image at {} is {} bytes, above the {} byte limit",
                url,
                len,
                settings.max_image_bytes
            );
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Error reading image download stream")?;
        bytes.extend_from_slice(&chunk);

        if bytes.len() as u64 > settings.max_image_bytes {
            anyhow::bail!(
                "Image at {} exceeded the {} byte limit mid-download",
                url,
                settings.max_image_bytes
            );
        }
    }

    debug!("Fetched {} bytes from {}", bytes.len(), url);

    Ok(bytes)
}
