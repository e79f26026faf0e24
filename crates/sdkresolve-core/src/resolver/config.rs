//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Debug toggles emitted as compile definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Emit `OSS_PLAYFAB_VERBOSE_VOIP_LOGGING=1`.
    pub verbose_voip_logging: bool,
    /// Emit `OSS_PLAYFAB_VERBOSE_PACKET_LEVEL_LOGGING=1`.
    pub verbose_packet_level_logging: bool,
}

impl ResolverConfig {
    #[must_use]
    pub const fn with_verbose_voip_logging(mut self, enabled: bool) -> Self {
        self.verbose_voip_logging = enabled;
        self
    }

    #[must_use]
    pub const fn with_verbose_packet_level_logging(mut self, enabled: bool) -> Self {
        self.verbose_packet_level_logging = enabled;
        self
    }
}
