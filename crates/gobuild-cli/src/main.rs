//! gobuild CLI
//!
//! Resolves build configuration, build plans and module BOMs for Go
//! projects.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings (such as buildpack.yml deprecation) are always shown;
    // --verbose adds debug detail.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{}: tracing subscriber already installed", "warning".yellow());
    }
    tracing::debug!(version = %cli.buildpack_version, "Verbose mode enabled");

    match cli.command {
        Commands::Resolve { path, json } => {
            commands::run_resolve(&path, &cli.buildpack_version, json)
        }
        Commands::Detect { path } => commands::run_detect(&path, &cli.buildpack_version),
        Commands::Bom {
            path,
            target,
            tool,
            json,
        } => commands::run_bom(&path, &target, &tool, json),
    }
}
