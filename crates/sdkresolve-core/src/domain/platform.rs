//! Target platform identifiers and the static family table.
//!
//! The set of platforms is closed and known when the resolver itself is
//! built, so platform grouping (desktop, GDK, console) is a lookup in a
//! fixed table rather than a runtime probe of the host build tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformId {
    /// 64-bit desktop Windows.
    Win64,
    /// Windows built against the GDK.
    WinGDK,
    /// Xbox One family built against the GDK.
    XboxOneGDK,
    /// Xbox Series X|S.
    XSX,
    /// Nintendo Switch.
    Switch,
    /// PlayStation 4.
    PS4,
    /// PlayStation 5.
    PS5,
}

/// How a platform's native dependencies are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformFamily {
    /// Fixed `Include`/`Lib`/`Redist` layout shipped in the plugin tree.
    Desktop,
    /// Plugin-tree override, else host-provided GDK extension SDKs.
    Gdk,
    /// Versioned packages recovered from `packages.config`.
    Switch,
    /// No artifacts ship in this tree; downstream tooling handles them.
    Confidential,
}

/// One row of the platform table.
struct PlatformInfo {
    id: PlatformId,
    tag: &'static str,
    family: PlatformFamily,
    dir_name: &'static str,
    aliases: &'static [&'static str],
}

static PLATFORM_TABLE: [PlatformInfo; 7] = [
    PlatformInfo {
        id: PlatformId::Win64,
        tag: "Win64",
        family: PlatformFamily::Desktop,
        dir_name: "Windows",
        aliases: &["Windows"],
    },
    PlatformInfo {
        id: PlatformId::WinGDK,
        tag: "WinGDK",
        family: PlatformFamily::Gdk,
        dir_name: "GDK",
        aliases: &["GDK"],
    },
    PlatformInfo {
        id: PlatformId::XboxOneGDK,
        tag: "XboxOneGDK",
        family: PlatformFamily::Gdk,
        dir_name: "GDK",
        aliases: &[],
    },
    PlatformInfo {
        id: PlatformId::XSX,
        tag: "XSX",
        family: PlatformFamily::Gdk,
        dir_name: "GDK",
        aliases: &[],
    },
    PlatformInfo {
        id: PlatformId::Switch,
        tag: "Switch",
        family: PlatformFamily::Switch,
        dir_name: "Switch",
        aliases: &[],
    },
    PlatformInfo {
        id: PlatformId::PS4,
        tag: "PS4",
        family: PlatformFamily::Confidential,
        dir_name: "PS4",
        aliases: &["PlayStation4"],
    },
    PlatformInfo {
        id: PlatformId::PS5,
        tag: "PS5",
        family: PlatformFamily::Confidential,
        dir_name: "PS5",
        aliases: &["PlayStation5"],
    },
];

impl PlatformId {
    /// Every supported platform, in table order.
    pub const ALL: [Self; 7] = [
        Self::Win64,
        Self::WinGDK,
        Self::XboxOneGDK,
        Self::XSX,
        Self::Switch,
        Self::PS4,
        Self::PS5,
    ];

    fn info(self) -> &'static PlatformInfo {
        // Rows are listed in variant order.
        &PLATFORM_TABLE[self as usize]
    }

    /// Canonical platform tag as the host build tool spells it.
    pub fn as_str(self) -> &'static str {
        self.info().tag
    }

    /// Family used to pick the resolution strategy.
    pub fn family(self) -> PlatformFamily {
        self.info().family
    }

    /// Directory under the plugin's `Platforms/` folder holding this
    /// platform's artifacts.
    pub fn dir_name(self) -> &'static str {
        self.info().dir_name
    }

    /// Upper-cased tag used in the `OSS_PLAYFAB_<PLATFORM>` define.
    pub fn define_suffix(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform tag is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for PlatformId {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PLATFORM_TABLE
            .iter()
            .find(|row| {
                row.tag.eq_ignore_ascii_case(wanted)
                    || row.aliases.iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .map(|row| row.id)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Desktop => "desktop",
            Self::Gdk => "gdk",
            Self::Switch => "switch",
            Self::Confidential => "confidential",
        };
        f.write_str(name)
    }
}

/// Build configuration of the target being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildConfiguration {
    Debug,
    DebugGame,
    #[default]
    Development,
    Test,
    Shipping,
}

impl BuildConfiguration {
    /// `Test` and `Shipping` link against release-tier vendor libraries.
    pub fn is_release_tier(self) -> bool {
        matches!(self, Self::Test | Self::Shipping)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::DebugGame => "DebugGame",
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a build configuration name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown build configuration '{0}', expected one of: \
     Debug, DebugGame, Development, Test, Shipping"
)]
pub struct UnknownBuildConfiguration(pub String);

impl FromStr for BuildConfiguration {
    type Err = UnknownBuildConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "debuggame" => Ok(Self::DebugGame),
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "shipping" => Ok(Self::Shipping),
            _ => Err(UnknownBuildConfiguration(s.trim().to_string())),
        }
    }
}
