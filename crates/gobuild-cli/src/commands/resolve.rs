//! Resolve command implementation

use std::path::Path;

use colored::Colorize;
use gobuild_core::{
    BuildConfiguration, BuildpackYmlReader, ConfigurationResolver, FsTargetManager, ProcessEnv,
};

use super::project_dir;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(path: &Path, buildpack_version: &str, json: bool) -> Result<()> {
    let env = ProcessEnv;
    let targets = FsTargetManager::new();
    let reader = BuildpackYmlReader::new(&env);
    let resolver = ConfigurationResolver::new(&targets, &reader, &env);

    let config = resolver.resolve(buildpack_version, &project_dir(path)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_config(path, &config);
    }
    Ok(())
}

fn print_config(path: &Path, config: &BuildConfiguration) {
    println!("{}", "Build Configuration".bold());
    println!();
    println!("{}:        {}", "Path".dimmed(), path.display());
    println!(
        "{}: {}",
        "Import path".dimmed(),
        config
            .import_path
            .as_deref()
            .map(|p| p.cyan().to_string())
            .unwrap_or_else(|| "(module default)".dimmed().to_string())
    );
    let bom = if config.generate_bom {
        "required".green()
    } else {
        "skipped".yellow()
    };
    println!("{}:  {}", "Module BOM".dimmed(), bom);
    println!();

    println!("{}:", "Targets".bold());
    for target in &config.targets {
        println!("  {} {}", "+".green(), target.cyan());
    }
    println!();

    println!("{}:", "Flags".bold());
    if config.flags.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for flag in &config.flags {
            println!("  {}", flag);
        }
    }
}
