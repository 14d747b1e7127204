//! Module bill of materials for Go projects
//!
//! Runs `cyclonedx-gomod` against a build target and turns the CycloneDX
//! JSON it writes into [`BomEntry`] records. Invocation goes through the
//! [`Executable`] trait so tests can stand in for the real tool.

pub mod error;
pub mod executable;
pub mod module_bom;
pub mod types;

pub use error::{BomError, Result};
pub use executable::{CommandExecutable, ExecOutput, Executable, Execution};
pub use module_bom::{BOM_FILE, ModuleBom};
pub use types::{BomEntry, BomMetadata, Checksum, ChecksumAlgorithm};
