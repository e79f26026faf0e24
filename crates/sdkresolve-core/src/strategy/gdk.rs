//! GDK platforms: a complete override tree in the plugin wins, otherwise
//! the host's installed extension SDKs are used.
//!
//! XCurl is optional in both modes. A missing XCurl redistributable only
//! logs a warning, while a missing Party or Multiplayer extension fails.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{PlatformId, ResolvedDependencySet};
use crate::layout::{self, STANDARD_LAYOUT};

use super::builder::DependencySetBuilder;
use super::{PlatformStrategy, ResolveContext, StrategyError};

pub const PARTY_EXTENSION: &str = "PlayFab.Party.Cpp";
pub const PARTY_XBOX_LIVE_EXTENSION: &str = "PlayFab.PartyXboxLive.Cpp";
pub const MULTIPLAYER_EXTENSION: &str = "PlayFab.Multiplayer.Cpp";
pub const XCURL_EXTENSION: &str = "Xbox.XCurl.API";

const XCURL_STEM: &str = "XCurl";

/// A core GDK component: its extension name, import library and
/// redistributable stem.
struct Component {
    extension: &'static str,
    library: &'static str,
    stem: &'static str,
}

const COMPONENTS: &[Component] = &[
    Component {
        extension: PARTY_EXTENSION,
        library: "Party.lib",
        stem: "Party",
    },
    Component {
        extension: PARTY_XBOX_LIVE_EXTENSION,
        library: "PartyXboxLive.lib",
        stem: "PartyXboxLive",
    },
    Component {
        extension: MULTIPLAYER_EXTENSION,
        library: "PlayFabMultiplayerGDK.lib",
        stem: "PlayFabMultiplayerGDK",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct GdkStrategy {
    platform: PlatformId,
}

impl GdkStrategy {
    pub const fn new(platform: PlatformId) -> Self {
        Self { platform }
    }

    fn resolve_override(set: &mut DependencySetBuilder, root: &Path) -> Result<(), StrategyError> {
        layout::validate(root, STANDARD_LAYOUT)?;
        debug!(root = %root.display(), "Using GDK override tree");

        set.include_dir(root.join("Include"))?;
        let lib_dir = root.join("Lib");
        let redist_dir = root.join("Redist");
        for component in COMPONENTS {
            set.link_library(lib_dir.join(component.library))?;
        }
        for component in COMPONENTS {
            set.stage_with_symbols(&redist_dir, component.stem, "dll", "pdb")?;
        }
        Ok(())
    }

    fn resolve_extensions(
        set: &mut DependencySetBuilder,
        ctx: &ResolveContext<'_>,
    ) -> Result<(), StrategyError> {
        debug!(root = %ctx.root_dir.display(), "No GDK override tree, using host extensions");

        for component in COMPONENTS {
            let lookup = |for_redistribution: bool| {
                ctx.extensions
                    .extension_dir(component.extension, for_redistribution)
                    .ok_or_else(|| {
                        StrategyError::DependencyNotFound(format!(
                            "{} extension{}",
                            component.extension,
                            if for_redistribution {
                                " (redistribution)"
                            } else {
                                ""
                            }
                        ))
                    })
            };
            let dev_dir = lookup(false)?;
            let redist_dir = lookup(true)?;

            set.include_dir(dev_dir.join("Include"))?;
            set.link_library(dev_dir.join("Lib").join(component.library))?;
            set.stage_with_symbols(&redist_dir, component.stem, "dll", "pdb")?;
        }
        Ok(())
    }

    fn add_xcurl(set: &mut DependencySetBuilder, ctx: &ResolveContext<'_>) -> Result<(), StrategyError> {
        let Some(redist_dir) = ctx.extensions.extension_dir(XCURL_EXTENSION, true) else {
            warn!("{XCURL_EXTENSION} extension not installed, XCurl will not be staged");
            return Ok(());
        };

        let binary = redist_dir.join(format!("{XCURL_STEM}.dll"));
        let symbols = redist_dir.join(format!("{XCURL_STEM}.pdb"));
        if !binary.is_file() || !symbols.is_file() {
            warn!(dir = %redist_dir.display(), "XCurl redistributables incomplete, skipping");
            return Ok(());
        }

        set.stage_with_symbols(&redist_dir, XCURL_STEM, "dll", "pdb")?;
        set.delay_load_library(binary)
    }
}

impl PlatformStrategy for GdkStrategy {
    fn platform(&self) -> PlatformId {
        self.platform
    }

    fn is_desktop_class(&self) -> bool {
        self.platform == PlatformId::WinGDK
    }

    fn extra_dependencies(&self) -> Vec<&'static str> {
        vec!["GDKCore", "OnlineSubsystemGDK"]
    }

    fn compile_definitions(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("ONLINESUBSYSTEMGDK_PACKAGE".to_string(), "1".to_string())])
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ResolvedDependencySet, StrategyError> {
        let mut set = DependencySetBuilder::new();
        if ctx.root_dir.is_dir() {
            Self::resolve_override(&mut set, ctx.root_dir)?;
        } else {
            Self::resolve_extensions(&mut set, ctx)?;
        }
        Self::add_xcurl(&mut set, ctx)?;
        Ok(set.build())
    }
}
