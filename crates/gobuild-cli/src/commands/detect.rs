//! Detect command implementation

use std::path::Path;

use gobuild_core::{
    BuildpackYmlReader, ConfigurationResolver, DetectContext, FsTargetManager, ProcessEnv, detect,
};

use super::project_dir;
use crate::error::Result;

/// Run the detect command, printing the plan as TOML
pub fn run_detect(path: &Path, buildpack_version: &str) -> Result<()> {
    let env = ProcessEnv;
    let targets = FsTargetManager::new();
    let reader = BuildpackYmlReader::new(&env);
    let resolver = ConfigurationResolver::new(&targets, &reader, &env);

    let context = DetectContext {
        working_dir: project_dir(path)?,
        buildpack_version: buildpack_version.to_string(),
    };
    let result = detect(&resolver, &context)?;

    print!("{}", result.plan.to_toml()?);
    Ok(())
}
