//! Top-level resolution errors.

use std::fmt;

use thiserror::Error;

use crate::domain::PlatformId;
use crate::strategy::StrategyError;

/// Failure of a resolution call.
///
/// `UnsupportedPlatform` is the only failure raised before a strategy is
/// chosen; everything else comes from one strategy and is tagged with its
/// platform.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("platform '{id}' is not supported")]
    UnsupportedPlatform { id: String },

    #[error("{platform}: {source}")]
    Platform {
        platform: PlatformId,
        #[source]
        source: StrategyError,
    },
}

/// Category of a resolution failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedPlatform,
    Layout,
    Manifest,
    MissingEnvironment,
    DependencyNotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnsupportedPlatform => "unsupported platform",
            Self::Layout => "layout error",
            Self::Manifest => "manifest error",
            Self::MissingEnvironment => "missing environment",
            Self::DependencyNotFound => "dependency not found",
        };
        f.write_str(name)
    }
}

impl ResolutionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::Platform { source, .. } => match source {
                StrategyError::Layout(_) => ErrorKind::Layout,
                StrategyError::Manifest(_) => ErrorKind::Manifest,
                StrategyError::MissingEnvironment(_) => ErrorKind::MissingEnvironment,
                StrategyError::DependencyNotFound(_) => ErrorKind::DependencyNotFound,
            },
        }
    }

    /// Platform whose strategy failed, if one was selected.
    pub const fn platform(&self) -> Option<PlatformId> {
        match self {
            Self::UnsupportedPlatform { .. } => None,
            Self::Platform { platform, .. } => Some(*platform),
        }
    }

    /// The underlying strategy error, if any.
    pub const fn strategy_error(&self) -> Option<&StrategyError> {
        match self {
            Self::UnsupportedPlatform { .. } => None,
            Self::Platform { source, .. } => Some(source),
        }
    }
}
