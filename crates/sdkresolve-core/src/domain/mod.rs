//! Domain types shared by the parser, validator, strategies and resolver.

mod dependency_set;
mod module_config;
mod platform;

pub use dependency_set::{
    LibraryEntry, LoadBehavior, ResolvedDependencySet, RuntimeDependency, StagedFileType,
    TARGET_OUTPUT_DIR,
};
pub use module_config::ModuleConfiguration;
pub use platform::{
    BuildConfiguration, PlatformFamily, PlatformId, UnknownBuildConfiguration, UnknownPlatform,
};
