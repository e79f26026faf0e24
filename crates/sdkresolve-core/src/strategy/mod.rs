//! Per-platform resolution strategies.
//!
//! Each platform family has one `PlatformStrategy` implementation. The
//! strategy is picked once from the static platform table; there is no
//! transition between strategies during a resolution.

mod builder;
mod confidential;
mod desktop;
mod error;
mod gdk;
mod switch;

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{BuildConfiguration, PlatformFamily, PlatformId, ResolvedDependencySet};
use crate::ports::{EnvironmentSource, ExtensionLookup};

pub use confidential::ConfidentialStrategy;
pub use desktop::DesktopStrategy;
pub use error::StrategyError;
pub use gdk::{
    GdkStrategy, MULTIPLAYER_EXTENSION, PARTY_EXTENSION, PARTY_XBOX_LIVE_EXTENSION,
    XCURL_EXTENSION,
};
pub use switch::{NINTENDO_SDK_ROOT, SwitchStrategy};

/// Inputs available to a strategy for one resolution.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// The platform's artifact root.
    pub root_dir: &'a Path,
    pub env: &'a dyn EnvironmentSource,
    pub extensions: &'a dyn ExtensionLookup,
    pub build_configuration: BuildConfiguration,
}

/// How one platform's native dependencies are located and validated.
pub trait PlatformStrategy: Send + Sync {
    fn platform(&self) -> PlatformId;

    /// Whether the platform is a desktop/PC-class target.
    fn is_desktop_class(&self) -> bool;

    /// Extra module names the platform requires, in declaration order.
    fn extra_dependencies(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Platform-specific private compile definitions.
    fn compile_definitions(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Validate the artifact root and assemble the dependency set.
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ResolvedDependencySet, StrategyError>;
}

/// Select the strategy for `platform`.
pub fn strategy_for(platform: PlatformId) -> Box<dyn PlatformStrategy> {
    match platform.family() {
        PlatformFamily::Desktop => Box::new(DesktopStrategy),
        PlatformFamily::Gdk => Box::new(GdkStrategy::new(platform)),
        PlatformFamily::Switch => Box::new(SwitchStrategy),
        PlatformFamily::Confidential => Box::new(ConfidentialStrategy::new(platform)),
    }
}
