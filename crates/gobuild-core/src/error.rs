//! Error types for gobuild-core

/// Result type for gobuild-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a resolution failure.
///
/// Lets callers react to the category without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filesystem access failed for a reason other than "not found"
    Io,
    /// Malformed input text: config file, boolean override, or shell syntax
    Parse,
    /// Well-formed input that is not acceptable
    Validation,
    /// Detection could not produce a plan
    Detect,
    /// A result could not be serialized
    Serialize,
}

/// Errors that can occur while resolving a build configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Environment variable holds text that is not a boolean
    #[error("{variable} value ({value}) is not a valid boolean")]
    InvalidBool { variable: String, value: String },

    /// Flag text could not be tokenized
    #[error("{source_name} value ({value}) could not be parsed: {message}")]
    ShellSyntax {
        source_name: String,
        value: String,
        message: String,
    },

    /// Linker flag override split into more than one argument
    #[error("{variable} value ({value}) could not be parsed: value contains multiple words")]
    AmbiguousLdflags { variable: String, value: String },

    /// Explicit build target rejected for this project layout
    #[error("failed to determine build targets: {target:?} {reason}")]
    InvalidTarget { target: String, reason: String },

    /// Build target is not a usable glob pattern
    #[error("failed to determine build targets: invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Detection failed because the configuration could not be resolved
    #[error("failed to parse build configuration: {0}")]
    DetectFailed(#[source] Box<Error>),

    // Transparent wrappers for underlying crate errors
    /// Filesystem or config-file error from gobuild-fs
    #[error(transparent)]
    Fs(#[from] gobuild_fs::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Fs(gobuild_fs::Error::Io { .. }) => ErrorKind::Io,
            Error::Fs(_) | Error::InvalidBool { .. } | Error::ShellSyntax { .. } => {
                ErrorKind::Parse
            }
            Error::AmbiguousLdflags { .. }
            | Error::InvalidTarget { .. }
            | Error::InvalidPattern { .. } => ErrorKind::Validation,
            Error::DetectFailed(_) => ErrorKind::Detect,
            Error::TomlSer(_) => ErrorKind::Serialize,
        }
    }

    pub(crate) fn io(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Error::Fs(gobuild_fs::Error::io(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_fs_errors() {
        let io = Error::io("/work/go.mod", std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(io.kind(), ErrorKind::Io);

        let parse = Error::Fs(gobuild_fs::Error::ConfigParse {
            path: "/work/buildpack.yml".into(),
            message: "bad indent".into(),
        });
        assert_eq!(parse.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_detect_failed_wraps_cause() {
        let cause = Error::InvalidBool {
            variable: "BP_DISABLE_MODULE_BOM".into(),
            value: "maybe".into(),
        };
        let err = Error::DetectFailed(Box::new(cause));

        assert_eq!(err.kind(), ErrorKind::Detect);
        assert!(err.to_string().starts_with("failed to parse build configuration: "));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_ambiguous_ldflags_message() {
        let err = Error::AmbiguousLdflags {
            variable: "BP_GO_BUILD_LDFLAGS".into(),
            value: "-X a\" \"b".into(),
        };
        assert!(err.to_string().contains("multiple words"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_target_names_target() {
        let err = Error::InvalidTarget {
            target: "./cmd/missing".into(),
            reason: "does not exist".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to determine build targets: \"./cmd/missing\" does not exist"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
