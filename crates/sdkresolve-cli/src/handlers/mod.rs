//! Command handlers.
//!
//! Each handler builds a `Resolver` from its arguments, runs one call and
//! prints the result to stdout.

pub mod configure;
pub mod platforms;
pub mod resolve;

use sdkresolve_core::{ExtensionSdkDir, Resolver, ResolverConfig};
use tracing::debug;

use crate::commands::TargetArgs;

/// Resolver wired to the extension directory named in `target`, if any.
fn resolver_for(target: &TargetArgs, config: ResolverConfig) -> Resolver {
    let resolver = Resolver::new(config);
    match target.extension_dir() {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using host extension SDK directory");
            resolver.with_extensions(ExtensionSdkDir::new(dir))
        }
        None => resolver,
    }
}
