//! Configuration system
//!
//! Loads the XML file passed via `--config`:
//!
//! ```xml
//! <root>
//!   <package_name>serde</package_name>
//!   <repository>/path/to/checkout</repository>
//!   <mode>local</mode>
//! </root>
//! ```
//!
//! All three elements are required direct children of the root element. The
//! root's tag name is not checked.

mod package_config;

pub use package_config::{Mode, PackageConfig};
