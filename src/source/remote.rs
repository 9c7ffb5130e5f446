//! Remote manifest download
//!
//! One blocking GET, no retries. The body is staged in a temporary file for
//! the duration of parsing and removed afterwards.

use crate::{DepvizError, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Upper bound on the whole request, connect through body
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Download a manifest body as text
pub fn fetch_manifest(url: &Url) -> Result<String> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("depviz/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            DepvizError::fetch_failed(url.as_str(), format!("failed to create HTTP client: {}", e))
        })?;

    tracing::info!(%url, "Fetching manifest");

    let response = client
        .get(url.clone())
        .send()
        .map_err(|e| DepvizError::fetch_failed(url.as_str(), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DepvizError::fetch_failed(
            url.as_str(),
            format!("HTTP status {}", status),
        ));
    }

    let bytes = response
        .bytes()
        .map_err(|e| DepvizError::fetch_failed(url.as_str(), e))?;
    let body = String::from_utf8(bytes.to_vec())
        .map_err(|e| DepvizError::fetch_failed(url.as_str(), e))?;
    tracing::debug!(bytes = body.len(), "Fetched manifest");
    Ok(body)
}

/// Fetch a manifest, stage it in a temporary file and run `f` over its text.
pub(crate) fn with_fetched_manifest<T>(url: &Url, f: impl FnOnce(&str) -> T) -> Result<T> {
    let body = fetch_manifest(url)?;
    with_staged(&body, |path| std::fs::read_to_string(path).map(|text| f(&text)))
}

/// Write `body` to a temporary file and hand its path to `f`.
///
/// The file is removed whether or not `f` succeeds; a failed removal is
/// logged and ignored.
fn with_staged<T>(body: &str, f: impl FnOnce(&Path) -> std::io::Result<T>) -> Result<T> {
    let mut staged = tempfile::Builder::new()
        .prefix("depviz-")
        .suffix(".toml")
        .tempfile()?;
    staged.write_all(body.as_bytes())?;
    staged.flush()?;

    let path = staged.path().to_path_buf();
    tracing::debug!(path = %path.display(), "Staged manifest");

    let result = f(&path);

    if let Err(e) = staged.close() {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove staged manifest");
    }

    Ok(result?)
}
