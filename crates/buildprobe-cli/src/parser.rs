//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Build-environment capability detection and container builds.
#[derive(Parser)]
#[command(name = "buildprobe")]
#[command(about = "Detect build capabilities and build vendor-specific container images")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
