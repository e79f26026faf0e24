//! Desktop Windows: fixed `Include`/`Lib`/`Redist` layout in the plugin tree.

use crate::domain::{PlatformId, ResolvedDependencySet};
use crate::layout::{self, STANDARD_LAYOUT};

use super::builder::DependencySetBuilder;
use super::{PlatformStrategy, ResolveContext, StrategyError};

const SYSTEM_LIBRARIES: &[&str] = &["Party.lib", "PlayFabMultiplayerWin.lib"];
const REDISTRIBUTABLES: &[&str] = &["PartyWin", "PlayFabMultiplayerWin"];

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopStrategy;

impl PlatformStrategy for DesktopStrategy {
    fn platform(&self) -> PlatformId {
        PlatformId::Win64
    }

    fn is_desktop_class(&self) -> bool {
        true
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ResolvedDependencySet, StrategyError> {
        let root = ctx.root_dir;
        layout::validate(root, STANDARD_LAYOUT)?;

        let mut set = DependencySetBuilder::new();
        set.include_dir(root.join("Include"))?;

        let lib_dir = root.join("Lib");
        for lib in SYSTEM_LIBRARIES {
            set.link_library(lib_dir.join(lib))?;
        }

        let redist_dir = root.join("Redist");
        for stem in REDISTRIBUTABLES {
            set.stage_with_symbols(&redist_dir, stem, "dll", "pdb")?;
        }

        Ok(set.build())
    }
}
