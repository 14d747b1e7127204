//! Error types for gobuild-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code signalling that detection does not pass
pub const DETECT_FAIL_EXIT_CODE: i32 = 100;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gobuild-core
    #[error(transparent)]
    Core(#[from] gobuild_core::Error),

    /// Error from gobuild-fs
    #[error(transparent)]
    Fs(#[from] gobuild_fs::Error),

    /// Error from gobuild-bom
    #[error(transparent)]
    Bom(#[from] gobuild_bom::BomError),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) if e.kind() == gobuild_core::ErrorKind::Detect => {
                DETECT_FAIL_EXIT_CODE
            }
            _ => 1,
        }
    }
}
