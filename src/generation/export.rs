//! Client-side save of a generated icon.
//!
//! Resolves the opaque image reference (data URL or remote URL) to bytes,
//! checks that they decode as an image, and writes `<name>-icon.png` into the
//! given directory. Session state is never touched.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use base64::engine::general_purpose;
use base64::Engine;
use log::info;

pub async fn save_icon(
    http: &reqwest::Client,
    url: &str,
    name: &str,
    dir: &Path,
) -> Result<PathBuf> {
    let bytes = fetch_image_bytes(http, url).await?;

    image::load_from_memory(&bytes).context("payload is not a decodable image")?;

    let path = dir.join(format!("{}-icon.png", sanitize_name(name)));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write icon to {}", path.display()))?;

    info!("Saved icon to {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

async fn fetch_image_bytes(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    if let Some(rest) = url.strip_prefix("data:") {
        let payload = rest
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| anyhow!("unsupported data URL encoding"))?;
        general_purpose::STANDARD
            .decode(payload)
            .context("invalid base64 payload in data URL")
    } else if url.starts_with("http://") || url.starts_with("https://") {
        let response = http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        bail!("unsupported image reference: {url}");
    }
}

/// Keeps the user-visible name but strips anything that would escape the
/// target directory.
fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '-',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "icon".into()
    } else {
        cleaned
    }
}
