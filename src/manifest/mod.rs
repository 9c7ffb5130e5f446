//! Manifest parsing for package dependency listings
//!
//! Reads the section/key-value text format used by `Cargo.toml`-style
//! manifests without requiring it to be valid TOML. Unknown or malformed lines
//! are skipped rather than rejected.
//!
//! # Example Manifest
//!
//! ```toml
//! [package]
//! name = "demo"
//!
//! [dependencies]
//! serde = "1.0"   # trailing comments are ignored
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! yields `["serde", "tokio"]`. A manifest with no dependency entries yields
//! its section names instead, e.g. `["package"]`.

mod parser;

pub use parser::{parse, parse_sections, ManifestSection, DEPENDENCIES_SECTION};
