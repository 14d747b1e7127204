//! Command implementations for gobuild-cli

pub mod bom;
pub mod detect;
pub mod resolve;

use std::path::Path;

use gobuild_fs::NormalizedPath;

use crate::error::Result;

pub use bom::run_bom;
pub use detect::run_detect;
pub use resolve::run_resolve;

/// Resolve the project directory argument to an absolute path.
///
/// Relative arguments and symlinks are resolved here, and a missing
/// directory fails before any command work starts.
pub(crate) fn project_dir(path: &Path) -> Result<NormalizedPath> {
    let dir = gobuild_fs::canonicalize(&NormalizedPath::new(path))?;
    tracing::debug!(dir = %dir, "Resolved project directory");
    Ok(dir)
}
