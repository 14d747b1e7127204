//! Existence probes for project files
//!
//! Both the declarative config file and the module marker are probed here so
//! that "not found" is a negative answer and every other failure is an error
//! at each call site.

use std::fs;
use std::io::ErrorKind;

use crate::{Error, NormalizedPath, Result};

/// Report whether `path` exists.
///
/// `NotFound` maps to `Ok(false)`. Any other failure, such as a permission
/// error on a parent directory, is returned as [`Error::Io`].
pub fn file_exists(path: &NormalizedPath) -> Result<bool> {
    let native = path.to_native();
    match fs::metadata(&native) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(path = %path, "not present");
            Ok(false)
        }
        Err(e) => Err(Error::io(native, e)),
    }
}

/// Canonicalize a path without the Windows `\\?\` prefix.
pub fn canonicalize(path: &NormalizedPath) -> Result<NormalizedPath> {
    let native = path.to_native();
    dunce::canonicalize(&native)
        .map(NormalizedPath::new)
        .map_err(|e| Error::io(native, e))
}
