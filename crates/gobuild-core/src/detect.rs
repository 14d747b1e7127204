//! Detection: turning a resolved configuration into a build plan
//!
//! The plan always requires `go` at build time. It also requires
//! `cyclonedx-gomod` when a module BOM has to be generated.

use gobuild_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::config::ConfigurationParser;
use crate::error::{Error, Result};

/// Name of the Go toolchain requirement
pub const GO_REQUIREMENT: &str = "go";

/// Name of the module BOM tool requirement
pub const BOM_REQUIREMENT: &str = "cyclonedx-gomod";

/// Inputs to detection.
#[derive(Debug, Clone)]
pub struct DetectContext {
    pub working_dir: NormalizedPath,
    pub buildpack_version: String,
}

/// Metadata attached to a plan requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementMetadata {
    /// Needed while building, not only at launch
    pub build: bool,
}

/// A single dependency the build needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlanRequirement {
    pub name: String,
    pub metadata: RequirementMetadata,
}

impl BuildPlanRequirement {
    fn at_build(name: &str) -> Self {
        Self {
            name: name.to_string(),
            metadata: RequirementMetadata { build: true },
        }
    }
}

/// Requirements the build declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub requires: Vec<BuildPlanRequirement>,
}

impl BuildPlan {
    /// Render as TOML (`[[requires]]` tables).
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn requires(&self, name: &str) -> bool {
        self.requires.iter().any(|r| r.name == name)
    }
}

/// Outcome of a successful detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectResult {
    pub plan: BuildPlan,
}

/// Resolve the project configuration and derive its build plan.
///
/// Any resolution error becomes [`Error::DetectFailed`], which callers
/// should report as a failed detection.
pub fn detect(parser: &dyn ConfigurationParser, context: &DetectContext) -> Result<DetectResult> {
    let config = parser
        .parse(&context.buildpack_version, &context.working_dir)
        .map_err(|e| Error::DetectFailed(Box::new(e)))?;

    let mut requires = vec![BuildPlanRequirement::at_build(GO_REQUIREMENT)];
    if config.generate_bom {
        requires.push(BuildPlanRequirement::at_build(BOM_REQUIREMENT));
    }

    Ok(DetectResult {
        plan: BuildPlan { requires },
    })
}
