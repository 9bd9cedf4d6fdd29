//! Source text acquisition.
//!
//! The remote path issues a single HTTP GET with a per-request timeout
//! and no retries; any network failure or non-2xx status aborts the run.
//! The local path reads a UTF-8 file instead, for offline use and tests.
//! Both normalize line endings before handing the text downstream.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::Duration;

/// Download the text at `url`, failing on timeout, connection errors,
/// or a non-success status.
pub async fn fetch_text(url: &str, timeout_secs: u64) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    Ok(normalize_newlines(&body))
}

/// Read a local UTF-8 file as the source text.
pub fn read_text(path: &Path) -> Result<String> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(normalize_newlines(&body))
}

/// Collapse CRLF line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
