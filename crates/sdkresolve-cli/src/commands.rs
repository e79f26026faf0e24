//! Commands enum and shared target arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use sdkresolve_core::{BuildConfiguration, PlatformId, platform_root};

use crate::error::CliError;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve include dirs, libraries and staged files for a platform
    Resolve(TargetArgs),

    /// Show module dependencies and compile definitions for a platform
    Configure {
        #[command(flatten)]
        target: TargetArgs,
        /// Enable verbose VOIP logging in the subsystem
        #[arg(long, env = "SDKRESOLVE_VERBOSE_VOIP")]
        verbose_voip: bool,
        /// Enable packet-level logging in the subsystem
        #[arg(long, env = "SDKRESOLVE_VERBOSE_PACKETS")]
        verbose_packets: bool,
    },

    /// List supported platforms
    Platforms,
}

/// Which platform to resolve and where its artifacts live.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Platform tag (e.g. Win64, WinGDK, XSX, Switch, PS5)
    pub platform: String,

    /// Artifact root of the platform; takes precedence over --plugin-dir
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Plugin checkout; the root becomes <plugin-dir>/Platforms/<platform dir>
    #[arg(long, env = "SDKRESOLVE_PLUGIN_DIR")]
    pub plugin_dir: Option<PathBuf>,

    /// Directory holding host extension SDKs, one subdirectory per extension
    #[arg(long, env = "SDKRESOLVE_EXTENSION_DIR")]
    pub extension_dir: Option<PathBuf>,

    /// Build configuration (Debug, DebugGame, Development, Test, Shipping)
    #[arg(short = 'c', long, default_value = "Development")]
    pub configuration: BuildConfiguration,

    /// Print JSON instead of `key = value` lines
    #[arg(long)]
    pub json: bool,
}

impl TargetArgs {
    /// Artifact root to resolve against.
    ///
    /// With only a plugin directory, an unknown platform tag still yields a
    /// root so the resolver reports it as unsupported.
    pub fn root_dir(&self) -> Result<PathBuf, CliError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        let plugin_dir = self.plugin_dir.as_deref().ok_or_else(|| {
            CliError::Arguments("either --root or --plugin-dir is required".to_string())
        })?;
        Ok(self.platform.parse::<PlatformId>().map_or_else(
            |_| plugin_dir.to_path_buf(),
            |platform| platform_root(plugin_dir, platform),
        ))
    }

    pub fn extension_dir(&self) -> Option<&Path> {
        self.extension_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(platform: &str) -> TargetArgs {
        TargetArgs {
            platform: platform.to_string(),
            root: None,
            plugin_dir: None,
            extension_dir: None,
            configuration: BuildConfiguration::Development,
            json: false,
        }
    }

    #[test]
    fn explicit_root_wins() {
        let mut args = target("Win64");
        args.root = Some(PathBuf::from("/sdk/win"));
        args.plugin_dir = Some(PathBuf::from("/plugin"));
        assert_eq!(args.root_dir().unwrap(), PathBuf::from("/sdk/win"));
    }

    #[test]
    fn plugin_dir_maps_to_platform_directory() {
        let mut args = target("XSX");
        args.plugin_dir = Some(PathBuf::from("/plugin"));
        assert_eq!(
            args.root_dir().unwrap(),
            Path::new("/plugin").join("Platforms").join("GDK")
        );
    }

    #[test]
    fn missing_root_is_an_argument_error() {
        let err = target("Win64").root_dir().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
