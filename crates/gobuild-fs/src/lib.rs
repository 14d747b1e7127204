//! Filesystem support for gobuild
//!
//! Provides normalized path handling, the shared existence probe used for
//! marker and config files, and YAML config loading.

pub mod config;
pub mod error;
pub mod path;
pub mod probe;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use probe::{canonicalize, file_exists};
