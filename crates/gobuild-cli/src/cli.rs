//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gobuild - Resolve how a Go project should be built
#[derive(Parser, Debug)]
#[command(name = "gobuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Version of the buildpack doing the resolution
    #[arg(
        long,
        global = true,
        env = "BP_GO_BUILDPACK_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub buildpack_version: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved build configuration
    ///
    /// Reads buildpack.yml and the BP_GO_* environment variables.
    ///
    /// Examples:
    ///   gobuild resolve
    ///   BP_GO_TARGETS=./cmd/api gobuild resolve --json
    Resolve {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the build plan for the project as TOML
    Detect {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate the module bill of materials for a target
    Bom {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Build target to inventory, e.g. ./cmd/server
        #[arg(short, long)]
        target: String,

        /// BOM generator executable
        #[arg(long, default_value = "cyclonedx-gomod")]
        tool: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
