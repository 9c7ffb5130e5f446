//! depviz - Package dependency visualizer
//!
//! Reads an XML configuration naming a package, its repository and a lookup
//! mode, locates the package's manifest (on disk or over HTTP) and lists the
//! package's direct dependencies.
//!
//! # Architecture
//!
//! - **config**: XML configuration loading and validation
//! - **manifest**: tolerant line-oriented manifest parsing
//! - **source**: mode dispatch, local lookup and remote download
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod source;

// Re-exports
pub use config::{Mode, PackageConfig};
pub use error::{DepvizError, Result};
pub use source::{collect_dependencies, ManifestSource};
