//! Configure command handler.

use std::io::Write;

use sdkresolve_core::{ProcessEnvironment, ResolverConfig};

use crate::commands::TargetArgs;
use crate::error::CliError;

use super::resolver_for;

/// Execute the configure command.
pub fn execute(
    target: &TargetArgs,
    config: ResolverConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let root = target.root_dir()?;
    let module = resolver_for(target, config).configure(
        &target.platform,
        &root,
        &ProcessEnvironment,
        target.configuration,
    )?;

    if target.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&module)?)?;
    } else {
        writeln!(out, "{module}")?;
    }
    Ok(())
}
