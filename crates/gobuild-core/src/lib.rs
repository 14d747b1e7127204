//! Build configuration resolution for Go projects
//!
//! This crate decides what a Go build will do before it runs:
//!
//! - **Targets**: explicit package paths, validated against the project
//!   layout, or defaults discovered from `package main` directories
//! - **Flags**: `go build` flags merged from `buildpack.yml`,
//!   `BP_GO_BUILD_FLAGS` and `BP_GO_BUILD_LDFLAGS`
//! - **Import path**: an optional override for the module import path
//! - **Module BOM**: whether a dependency inventory must be generated
//!
//! # Architecture
//!
//! ```text
//!                 gobuild-cli
//!                      |
//!        detect -> ConfigurationResolver
//!                      |
//!     +----------------+----------------+
//!     |                |                |
//! ConfigSourceReader  FlagMerger   TargetManager
//! (buildpack.yml)   (shellwords)   (filesystem)
//!                      |
//!                 gobuild-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gobuild_core::{BuildpackYmlReader, ConfigurationResolver, FsTargetManager, ProcessEnv};
//! use gobuild_fs::NormalizedPath;
//!
//! # fn main() -> gobuild_core::Result<()> {
//! let env = ProcessEnv;
//! let targets = FsTargetManager::new();
//! let reader = BuildpackYmlReader::new(&env);
//! let resolver = ConfigurationResolver::new(&targets, &reader, &env);
//!
//! let config = resolver.resolve("1.2.3", &NormalizedPath::new("/workspace"))?;
//! println!("targets: {:?}", config.targets);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod detect;
pub mod env;
pub mod error;
pub mod targets;

pub use config::{
    BuildConfiguration, BuildpackYmlReader, ConfigSourceReader, ConfigurationParser,
    ConfigurationResolver, PartialConfiguration, merge_flags,
};
pub use detect::{
    BOM_REQUIREMENT, BuildPlan, BuildPlanRequirement, DetectContext, DetectResult, GO_REQUIREMENT,
    RequirementMetadata, detect,
};
pub use env::{EnvLookup, ProcessEnv};
pub use error::{Error, ErrorKind, Result};
pub use targets::{FsTargetManager, TargetManager};
