//! Error types for depviz
//!
//! Every failure on the path from config file to dependency list is terminal.
//! The CLI prints the message once and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for depviz operations
pub type Result<T> = std::result::Result<T, DepvizError>;

/// Error type for depviz operations
#[derive(Error, Debug)]
pub enum DepvizError {
    /// The config path does not reference an existing file
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file is not well-formed XML
    #[error("Invalid XML in configuration file: {0}")]
    MalformedDocument(String),

    /// A required element is absent from the document root
    #[error("Missing required configuration parameter: <{0}>")]
    MissingField(&'static str),

    /// A required element is present but blank
    #[error("Configuration parameter <{0}> is empty or whitespace-only")]
    EmptyField(&'static str),

    /// `mode` is neither `local` nor `remote`
    #[error("Unsupported mode '{0}': expected 'local' or 'remote'")]
    UnsupportedMode(String),

    /// Neither candidate manifest exists in local mode
    #[error("Manifest not found: tried {} and {}", .package.display(), .root.display())]
    ManifestNotFound { package: PathBuf, root: PathBuf },

    /// The remote manifest could not be downloaded
    #[error("Failed to fetch manifest from {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DepvizError {
    pub(crate) fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> Self {
        DepvizError::FetchFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
