//! Manifest sources
//!
//! Picks where the manifest comes from based on the configured mode, reads
//! it and hands the text to the manifest parser.

mod local;
mod remote;

pub use local::{manifest_candidates, resolve_local, MANIFEST_FILE};
pub use remote::{fetch_manifest, FETCH_TIMEOUT};

use crate::config::{Mode, PackageConfig};
use crate::{manifest, DepvizError, Result};
use reqwest::Url;
use std::path::PathBuf;

/// Where the manifest for a package lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// A manifest file on the local filesystem
    Local(PathBuf),
    /// A manifest downloaded with a single GET request
    Remote(Url),
}

impl ManifestSource {
    /// Read the manifest and extract its dependency names
    pub fn read_dependencies(&self) -> Result<Vec<String>> {
        let dependencies = match self {
            ManifestSource::Local(path) => {
                let text = std::fs::read_to_string(path)?;
                manifest::parse(&text)
            }
            ManifestSource::Remote(url) => remote::with_fetched_manifest(url, manifest::parse)?,
        };

        tracing::info!(source = %self, count = dependencies.len(), "Parsed manifest");
        Ok(dependencies)
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Local(path) => write!(f, "{}", path.display()),
            ManifestSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Decide which manifest to read for a loaded config
pub fn resolve(config: &PackageConfig) -> Result<ManifestSource> {
    let mode = config.mode()?;
    tracing::debug!(%mode, repository = %config.repository, "Resolving manifest source");

    match mode {
        Mode::Local => {
            resolve_local(&config.repository, &config.package_name).map(ManifestSource::Local)
        }
        Mode::Remote => {
            let url = Url::parse(&config.repository)
                .map_err(|e| DepvizError::fetch_failed(&config.repository, e))?;
            Ok(ManifestSource::Remote(url))
        }
    }
}

/// Resolve the manifest for a config and return its dependency names
pub fn collect_dependencies(config: &PackageConfig) -> Result<Vec<String>> {
    resolve(config)?.read_dependencies()
}
