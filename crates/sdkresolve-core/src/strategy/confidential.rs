//! PlayStation platforms. Their precompiled artifacts are not shipped in
//! this tree; the result only carries the confidential-platform marker.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::domain::{PlatformId, ResolvedDependencySet};
use crate::manifest::{self, MANIFEST_FILE};

use super::builder::DependencySetBuilder;
use super::{PlatformStrategy, ResolveContext, StrategyError};

#[derive(Debug, Clone, Copy)]
pub struct ConfidentialStrategy {
    platform: PlatformId,
}

impl ConfidentialStrategy {
    pub const fn new(platform: PlatformId) -> Self {
        Self { platform }
    }
}

impl PlatformStrategy for ConfidentialStrategy {
    fn platform(&self) -> PlatformId {
        self.platform
    }

    fn is_desktop_class(&self) -> bool {
        false
    }

    fn extra_dependencies(&self) -> Vec<&'static str> {
        match self.platform {
            PlatformId::PS5 => vec!["OnlineSubsystemPS5"],
            _ => vec!["OnlineSubsystemPS4"],
        }
    }

    fn compile_definitions(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            "OSS_PLAYFAB_CONFIDENTIAL_PLATFORM".to_string(),
            "1".to_string(),
        )])
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ResolvedDependencySet, StrategyError> {
        // The manifest is informational here; resolution never depends on it.
        let manifest_path = ctx.root_dir.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            match manifest::parse(&manifest_path) {
                Ok(packages) => info!(
                    platform = %self.platform,
                    party = %packages.party,
                    multiplayer = %packages.multiplayer,
                    "Confidential platform packages"
                ),
                Err(e) => warn!(platform = %self.platform, error = %e, "Ignoring unreadable manifest"),
            }
        }

        let mut set = DependencySetBuilder::new();
        set.mark_confidential();
        Ok(set.build())
    }
}
