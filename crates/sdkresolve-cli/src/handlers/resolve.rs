//! Resolve command handler.

use std::io::Write;

use sdkresolve_core::{ProcessEnvironment, ResolverConfig};

use crate::commands::TargetArgs;
use crate::error::CliError;

use super::resolver_for;

/// Execute the resolve command.
///
/// Writes the dependency set as `key = value` lines, or as JSON with
/// `--json`.
pub fn execute(target: &TargetArgs, out: &mut impl Write) -> Result<(), CliError> {
    let root = target.root_dir()?;
    let set = resolver_for(target, ResolverConfig::default()).resolve(
        &target.platform,
        &root,
        &ProcessEnvironment,
        target.configuration,
    )?;

    if target.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&set)?)?;
    } else {
        writeln!(out, "{set}")?;
    }
    Ok(())
}
