//! Error types for BOM generation

use std::path::PathBuf;

/// Errors that can occur while generating a module BOM
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    /// I/O error while running the tool or handling its output
    #[error("failed to {action} {path}: {source}")]
    Io {
        /// What was being attempted (e.g. "open", "remove")
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited with non-zero status
    #[error("failed to run {command} (exit code {code})")]
    CommandFailed {
        command: String,
        /// Exit code, or -1 when killed by a signal
        code: i32,
        /// Combined stdout and stderr
        output: String,
    },

    /// The tool's JSON output could not be decoded
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A component hash uses an algorithm we cannot name
    #[error("failed to get supported BOM checksum algorithm: {0} is not valid")]
    UnknownAlgorithm(String),
}

/// Result type alias for BOM operations
pub type Result<T> = std::result::Result<T, BomError>;
