//! Configuration resolution
//!
//! The `ConfigurationResolver` combines the project file, environment
//! overrides and filesystem state into one [`BuildConfiguration`].
//! Resolution is all-or-nothing: the first error aborts it.

use gobuild_fs::{NormalizedPath, file_exists};

use crate::env::EnvLookup;
use crate::error::{Error, Result};
use crate::targets::TargetManager;

use super::flags::merge_flags;
use super::types::{BuildConfiguration, PartialConfiguration};

/// Replaces the target list
pub const TARGETS_ENV: &str = "BP_GO_TARGETS";

/// Replaces the import path
pub const IMPORT_PATH_ENV: &str = "BP_GO_BUILD_IMPORT_PATH";

/// Disables module BOM generation when true
pub const DISABLE_MODULE_BOM_ENV: &str = "BP_DISABLE_MODULE_BOM";

/// Module marker file
pub const GO_MOD: &str = "go.mod";

/// Separator between entries of `BP_GO_TARGETS`
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// A source of project-level settings, such as a config file.
pub trait ConfigSourceReader: Send + Sync {
    /// Read settings for the project at `working_dir`.
    ///
    /// Returns `Ok(None)` when the source is not present.
    fn read(
        &self,
        buildpack_version: &str,
        working_dir: &NormalizedPath,
    ) -> Result<Option<PartialConfiguration>>;
}

/// Anything that can produce the final configuration for a project.
pub trait ConfigurationParser: Send + Sync {
    fn parse(
        &self,
        buildpack_version: &str,
        working_dir: &NormalizedPath,
    ) -> Result<BuildConfiguration>;
}

/// Resolves the effective build configuration for a project.
///
/// Holds shared references to its collaborators and no state of its own,
/// so one resolver may serve any number of calls, including concurrent ones
/// for unrelated directories.
pub struct ConfigurationResolver<'a> {
    target_manager: &'a dyn TargetManager,
    source_reader: &'a dyn ConfigSourceReader,
    env: &'a dyn EnvLookup,
}

impl<'a> ConfigurationResolver<'a> {
    pub fn new(
        target_manager: &'a dyn TargetManager,
        source_reader: &'a dyn ConfigSourceReader,
        env: &'a dyn EnvLookup,
    ) -> Self {
        Self {
            target_manager,
            source_reader,
            env,
        }
    }

    /// Resolve the configuration for the project at `working_dir`.
    ///
    /// Each field follows its own precedence:
    /// - **targets**: `BP_GO_TARGETS` when set (even to an empty list), else
    ///   the file value. A non-empty list is validated by the
    ///   [`TargetManager`]; an empty one is replaced by its defaults.
    /// - **flags**: see [`merge_flags`]
    /// - **import path**: `BP_GO_BUILD_IMPORT_PATH` when set, else the file
    ///   value. An empty value means unset.
    /// - **generate_bom**: `go.mod` exists and `BP_DISABLE_MODULE_BOM` is
    ///   not true
    pub fn resolve(
        &self,
        buildpack_version: &str,
        working_dir: &NormalizedPath,
    ) -> Result<BuildConfiguration> {
        let base = self
            .source_reader
            .read(buildpack_version, working_dir)?
            .unwrap_or_default();

        let mut targets = base.targets;
        if let Some(raw) = self.env.lookup(TARGETS_ENV) {
            targets = split_path_list(&raw);
        }

        let targets = if targets.is_empty() {
            self.target_manager.generate_defaults(working_dir)?
        } else {
            self.target_manager.clean_and_validate(targets, working_dir)?
        };

        let flags = merge_flags(&base.flags, self.env)?;

        let import_path = match self.env.lookup(IMPORT_PATH_ENV) {
            Some(value) => Some(value),
            None => base.import_path,
        }
        .filter(|path| !path.is_empty());

        let skip_bom = self.skip_module_bom()?;
        let has_module = file_exists(&working_dir.join(GO_MOD))?;

        Ok(BuildConfiguration {
            targets,
            flags,
            import_path,
            generate_bom: has_module && !skip_bom,
        })
    }

    /// Unset means false without parsing; set means it must be a boolean.
    fn skip_module_bom(&self) -> Result<bool> {
        match self.env.lookup(DISABLE_MODULE_BOM_ENV) {
            None => Ok(false),
            Some(value) => parse_bool(&value).ok_or(Error::InvalidBool {
                variable: DISABLE_MODULE_BOM_ENV.to_string(),
                value,
            }),
        }
    }
}

impl ConfigurationParser for ConfigurationResolver<'_> {
    fn parse(
        &self,
        buildpack_version: &str,
        working_dir: &NormalizedPath,
    ) -> Result<BuildConfiguration> {
        self.resolve(buildpack_version, working_dir)
    }
}

/// Split a path list on the platform separator, dropping empty entries.
pub fn split_path_list(raw: &str) -> Vec<String> {
    raw.split(PATH_LIST_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse boolean text the way Go's `strconv.ParseBool` does.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
