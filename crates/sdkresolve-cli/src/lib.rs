//! Command-line front end for `sdkresolve-core`.
//!
//! The binary parses arguments, builds a `Resolver` and prints either the
//! resolved dependency set or the full module configuration.

#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, TargetArgs};
pub use error::CliError;
pub use parser::Cli;
