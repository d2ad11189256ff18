//! Process-wide default reference set.
//!
//! The four standard runtime libraries every fixture compiles against are
//! resolved once, relative to the runtime directory, and shared by every
//! context built afterwards. The outcome of the first resolution is kept,
//! including a failure: a host that cannot locate its runtime is misconfigured
//! and retrying would not help.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::get_config;
use crate::core::{MetadataReference, ReferenceSet};
use crate::errors::{FixtureError, Result};

/// Library files making up the default reference set.
pub const DEFAULT_REFERENCE_FILES: [&str; 4] = [
    "mscorlib.dll",
    "System.dll",
    "System.Core.dll",
    "System.Runtime.dll",
];

static DEFAULT_REFERENCES: OnceLock<Result<ReferenceSet>> = OnceLock::new();

/// The shared default reference set, computed on first use.
pub fn default_references() -> Result<ReferenceSet> {
    cached_references(&DEFAULT_REFERENCES, locate_runtime_directory)
}

/// The first resolution stored in `cell`, success or failure; `locate` runs at most once.
fn cached_references(
    cell: &OnceLock<Result<ReferenceSet>>,
    locate: impl FnOnce() -> Result<PathBuf>,
) -> Result<ReferenceSet> {
    cell.get_or_init(|| resolve_default_references(locate)).clone()
}

/// Build the default reference set under the directory returned by `locate`.
pub fn resolve_default_references(
    locate: impl FnOnce() -> Result<PathBuf>,
) -> Result<ReferenceSet> {
    let runtime_directory = locate()?;
    log::debug!(
        "Resolving default references under {}",
        runtime_directory.display()
    );
    Ok(references_in(&runtime_directory))
}

fn references_in(directory: &Path) -> ReferenceSet {
    DEFAULT_REFERENCE_FILES
        .iter()
        .map(|file| MetadataReference::from_file(directory.join(file)))
        .collect()
}

/// Configured runtime directory, or the directory of the running executable.
fn locate_runtime_directory() -> Result<PathBuf> {
    if let Some(configured) = &get_config().runtime_directory {
        return Ok(configured.clone());
    }

    let executable = std::env::current_exe().map_err(|e| {
        FixtureError::environment(format!("Failed to locate the running executable: {}", e))
    })?;

    executable
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| FixtureError::environment("Failed to locate the runtime directory."))
}
