//! Configuration records

use serde::{Deserialize, Serialize};

/// The resolved configuration for one build.
///
/// Produced fresh by every resolution call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    /// Package paths to build, relative to the project root. Never empty
    /// after resolution.
    pub targets: Vec<String>,

    /// Arguments for `go build`. Holds at most one `-ldflags` token when an
    /// ldflags override was applied.
    pub flags: Vec<String>,

    /// Import path override; `None` leaves the choice to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,

    /// Whether a module dependency inventory must be generated.
    pub generate_bom: bool,
}

/// Settings supplied by a single configuration source.
///
/// Empty collections and `None` mean "not specified by this source".
/// The module BOM decision never comes from a source file, so it has no
/// field here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfiguration {
    pub targets: Vec<String>,
    pub flags: Vec<String>,
    pub import_path: Option<String>,
}

impl PartialConfiguration {
    /// Whether this source specified anything at all.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.flags.is_empty() && self.import_path.is_none()
    }
}
