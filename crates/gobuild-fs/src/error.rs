//! Error types for gobuild-fs

use std::path::PathBuf;

/// Result type for gobuild-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gobuild-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
