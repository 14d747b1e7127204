//! `buildpack.yml` configuration source

use gobuild_fs::{ConfigStore, NormalizedPath, file_exists};
use serde::Deserialize;

use crate::env::EnvLookup;
use crate::error::{Error, Result};

use super::resolver::ConfigSourceReader;
use super::shellwords;
use super::types::PartialConfiguration;

/// Project-level configuration file name
pub const BUILDPACK_YML: &str = "buildpack.yml";

#[derive(Debug, Default, Deserialize)]
struct BuildpackYml {
    #[serde(default)]
    go: GoSection,
}

#[derive(Debug, Default, Deserialize)]
struct GoSection {
    #[serde(default)]
    targets: Vec<String>,

    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Default, Deserialize)]
struct BuildSection {
    #[serde(default)]
    flags: Vec<String>,

    #[serde(default, rename = "import-path")]
    import_path: Option<String>,
}

/// Reads Go build settings from `buildpack.yml`.
///
/// Each `go.build.flags` entry is split with shell rules and environment
/// expansion, so `-ldflags="-X main.v=$VERSION"` becomes one argument.
pub struct BuildpackYmlReader<'a> {
    env: &'a dyn EnvLookup,
    store: ConfigStore,
}

impl<'a> BuildpackYmlReader<'a> {
    pub fn new(env: &'a dyn EnvLookup) -> Self {
        Self {
            env,
            store: ConfigStore::new(),
        }
    }

    fn parse(&self, path: &NormalizedPath) -> Result<PartialConfiguration> {
        let file: BuildpackYml = self.store.load(path)?;
        let go = file.go;

        let mut flags = Vec::new();
        for entry in &go.build.flags {
            let words = shellwords::split(entry, self.env).map_err(|e| Error::ShellSyntax {
                source_name: format!("{} go.build.flags", BUILDPACK_YML),
                value: entry.clone(),
                message: e.to_string(),
            })?;
            flags.extend(words);
        }

        Ok(PartialConfiguration {
            targets: go.targets,
            flags,
            import_path: go.build.import_path.filter(|p| !p.is_empty()),
        })
    }
}

impl ConfigSourceReader for BuildpackYmlReader<'_> {
    fn read(
        &self,
        buildpack_version: &str,
        working_dir: &NormalizedPath,
    ) -> Result<Option<PartialConfiguration>> {
        let path = working_dir.join(BUILDPACK_YML);
        if !file_exists(&path)? {
            return Ok(None);
        }

        tracing::debug!(%path, "Loading Go build settings");
        let config = self.parse(&path)?;

        if !config.is_empty() {
            match next_major_version(buildpack_version) {
                Some(next) => tracing::warn!(
                    "Setting the Go Build configurations such as targets and build flags \
                     through {BUILDPACK_YML} will be deprecated soon in Go Build Buildpack v{next}."
                ),
                None => tracing::warn!(
                    "Setting the Go Build configurations such as targets and build flags \
                     through {BUILDPACK_YML} will be deprecated soon."
                ),
            }
            tracing::warn!(
                "Please specify these configuration options through environment variables instead."
            );
        }

        Ok(Some(config))
    }
}

/// The next major release after `version`, e.g. `1.4.2` -> `2.0.0`.
fn next_major_version(version: &str) -> Option<semver::Version> {
    let current = semver::Version::parse(version.trim_start_matches('v')).ok()?;
    Some(semver::Version::new(current.major + 1, 0, 0))
}
