//! Native SDK dependency resolution for the PlayFab online subsystem.
//!
//! Given a target platform tag and the platform's artifact root, the
//! [`Resolver`] validates the vendor tree, reads the package manifest where
//! the platform uses one, and returns the include directories, libraries
//! and staged runtime files the build must wire in. Host capabilities
//! (environment variables, installed extension SDKs) come in through the
//! traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod layout;
pub mod manifest;
pub mod ports;
pub mod resolver;
pub mod strategy;

#[cfg(test)]
mod test_utils;

pub use domain::{
    BuildConfiguration, LibraryEntry, LoadBehavior, ModuleConfiguration, PlatformFamily,
    PlatformId, ResolvedDependencySet, RuntimeDependency, StagedFileType, TARGET_OUTPUT_DIR,
    UnknownBuildConfiguration, UnknownPlatform,
};
pub use layout::{LayoutError, STANDARD_LAYOUT};
pub use manifest::{MANIFEST_FILE, ManifestError, PackageKind, ResolvedPackages};
pub use ports::{
    EnvironmentSource, ExtensionLookup, ExtensionSdkDir, MapEnvironment, NoExtensions,
    ProcessEnvironment,
};
pub use resolver::{
    ErrorKind, PLATFORMS_DIR, ResolutionError, Resolver, ResolverConfig, platform_root,
};
pub use strategy::{NINTENDO_SDK_ROOT, StrategyError};
