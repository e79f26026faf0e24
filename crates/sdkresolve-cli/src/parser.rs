//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for resolving native SDK dependencies of the
/// PlayFab online subsystem.
#[derive(Parser)]
#[command(name = "sdkresolve")]
#[command(about = "Resolve platform native SDK dependencies")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
