//! Entry point: platform tag in, dependency set or module configuration out.

mod config;
mod error;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{BuildConfiguration, ModuleConfiguration, PlatformId, ResolvedDependencySet};
use crate::ports::{EnvironmentSource, ExtensionLookup, NoExtensions};
use crate::strategy::{self, PlatformStrategy, ResolveContext};

pub use config::ResolverConfig;
pub use error::{ErrorKind, ResolutionError};

/// Directory under the plugin root holding one subdirectory per platform.
pub const PLATFORMS_DIR: &str = "Platforms";

const PUBLIC_MODULES: &[&str] = &["OnlineSubsystemUtils"];

const PRIVATE_MODULES: &[&str] = &[
    "Core",
    "CoreUObject",
    "NetCore",
    "Engine",
    "Sockets",
    "Voice",
    "AudioMixer",
    "OnlineSubsystem",
    "Json",
    "PacketHandler",
    "Projects",
    "HTTP",
];

/// Artifact root of `platform` inside a plugin checkout.
pub fn platform_root(plugin_dir: &Path, platform: PlatformId) -> PathBuf {
    plugin_dir.join(PLATFORMS_DIR).join(platform.dir_name())
}

const fn flag(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Resolves native dependencies for one platform at a time.
///
/// Holds no per-call state, so one instance can serve any number of
/// resolutions, from any thread.
pub struct Resolver {
    config: ResolverConfig,
    extensions: Box<dyn ExtensionLookup>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    /// A resolver with no host extension SDKs available.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            extensions: Box::new(NoExtensions),
        }
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: impl ExtensionLookup + 'static) -> Self {
        self.extensions = Box::new(extensions);
        self
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the platform named by `platform_tag`.
    ///
    /// An unrecognized tag fails with `UnsupportedPlatform` before anything
    /// on disk is inspected.
    pub fn resolve(
        &self,
        platform_tag: &str,
        root_dir: &Path,
        env: &dyn EnvironmentSource,
        build: BuildConfiguration,
    ) -> Result<ResolvedDependencySet, ResolutionError> {
        let platform = parse_platform(platform_tag)?;
        self.resolve_platform(platform, root_dir, env, build)
    }

    pub fn resolve_platform(
        &self,
        platform: PlatformId,
        root_dir: &Path,
        env: &dyn EnvironmentSource,
        build: BuildConfiguration,
    ) -> Result<ResolvedDependencySet, ResolutionError> {
        let strategy = strategy::strategy_for(platform);
        self.run(strategy.as_ref(), root_dir, env, build)
    }

    /// Resolve `platform_tag` and wrap the result with the module names and
    /// compile definitions the online subsystem needs on that platform.
    pub fn configure(
        &self,
        platform_tag: &str,
        root_dir: &Path,
        env: &dyn EnvironmentSource,
        build: BuildConfiguration,
    ) -> Result<ModuleConfiguration, ResolutionError> {
        let platform = parse_platform(platform_tag)?;
        let strategy = strategy::strategy_for(platform);
        let dependencies = self.run(strategy.as_ref(), root_dir, env, build)?;
        let is_pc = strategy.is_desktop_class();

        let mut public_dependency_modules: Vec<String> =
            PUBLIC_MODULES.iter().map(ToString::to_string).collect();
        public_dependency_modules.extend(
            strategy
                .extra_dependencies()
                .into_iter()
                .map(ToString::to_string),
        );

        let mut public_definitions = BTreeMap::new();
        public_definitions.insert(
            "PLAYFAB_SUBSYSTEM".to_string(),
            r#"FName(TEXT("PLAYFAB"))"#.to_string(),
        );
        public_definitions.insert(
            "OSS_PLAYFAB_VERBOSE_VOIP_LOGGING".to_string(),
            flag(self.config.verbose_voip_logging).to_string(),
        );
        public_definitions.insert(
            "OSS_PLAYFAB_VERBOSE_PACKET_LEVEL_LOGGING".to_string(),
            flag(self.config.verbose_packet_level_logging).to_string(),
        );
        public_definitions.insert(
            format!("OSS_PLAYFAB_{}", platform.define_suffix()),
            "1".to_string(),
        );
        public_definitions.insert("OSS_PLAYFAB_IS_PC".to_string(), flag(is_pc).to_string());

        let mut private_definitions = strategy.compile_definitions();
        private_definitions.insert("ONLINESUBSYSTEMPLAYFAB_PACKAGE".to_string(), "1".to_string());

        Ok(ModuleConfiguration {
            platform,
            is_pc,
            public_dependency_modules,
            private_dependency_modules: PRIVATE_MODULES.iter().map(ToString::to_string).collect(),
            public_definitions,
            private_definitions,
            dependencies,
        })
    }

    fn run(
        &self,
        strategy: &dyn PlatformStrategy,
        root_dir: &Path,
        env: &dyn EnvironmentSource,
        build: BuildConfiguration,
    ) -> Result<ResolvedDependencySet, ResolutionError> {
        let platform = strategy.platform();
        debug!(
            platform = %platform,
            family = %platform.family(),
            root = %root_dir.display(),
            configuration = %build,
            "Resolving native dependencies"
        );

        let ctx = ResolveContext {
            root_dir,
            env,
            extensions: self.extensions.as_ref(),
            build_configuration: build,
        };
        let set = strategy
            .resolve(&ctx)
            .map_err(|source| ResolutionError::Platform { platform, source })?;

        info!(
            platform = %platform,
            includes = set.include_dirs().len(),
            libraries = set.libraries().len(),
            runtime = set.runtime_dependencies().len(),
            confidential = set.is_confidential_platform(),
            "Building for platform {platform}"
        );
        Ok(set)
    }
}

fn parse_platform(tag: &str) -> Result<PlatformId, ResolutionError> {
    tag.parse()
        .map_err(|_| ResolutionError::UnsupportedPlatform { id: tag.to_string() })
}
