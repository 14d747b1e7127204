//! BOM command implementation

use std::path::Path;

use colored::Colorize;
use gobuild_bom::{CommandExecutable, ModuleBom};

use super::project_dir;
use crate::error::Result;

/// Run the bom command
pub fn run_bom(path: &Path, target: &str, tool: &str, json: bool) -> Result<()> {
    let bom = ModuleBom::new(CommandExecutable::new(tool));
    let entries = bom.generate(&project_dir(path)?, target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({} components)", "Module BOM".bold(), entries.len());
    for entry in &entries {
        let licenses = if entry.metadata.licenses.is_empty() {
            "unknown license".dimmed().to_string()
        } else {
            entry.metadata.licenses.join(", ")
        };
        println!(
            "  {} {} {} ({})",
            "+".green(),
            entry.name.cyan(),
            entry.metadata.version,
            licenses
        );
    }
    Ok(())
}
