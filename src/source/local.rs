//! Local manifest lookup

use crate::{DepvizError, Result};
use std::path::{Path, PathBuf};

/// File name of the manifest looked up in local mode
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Candidate manifest paths, most specific first:
/// `{repository}/{package}/Cargo.toml` then `{repository}/Cargo.toml`
pub fn manifest_candidates(
    repository: impl AsRef<Path>,
    package_name: &str,
) -> (PathBuf, PathBuf) {
    let repository = repository.as_ref();
    (
        repository.join(package_name).join(MANIFEST_FILE),
        repository.join(MANIFEST_FILE),
    )
}

/// Find the manifest for a package inside a local checkout
pub fn resolve_local(repository: impl AsRef<Path>, package_name: &str) -> Result<PathBuf> {
    let (package, root) = manifest_candidates(repository, package_name);

    for candidate in [&package, &root] {
        tracing::debug!(path = %candidate.display(), "Checking for manifest");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(DepvizError::ManifestNotFound { package, root })
}
