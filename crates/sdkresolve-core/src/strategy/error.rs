//! Errors a platform strategy can report.

use thiserror::Error;

use crate::layout::LayoutError;
use crate::manifest::ManifestError;

/// Failure of one platform's resolution.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A required environment variable is unset or blank.
    #[error("environment variable {0} is not set")]
    MissingEnvironment(String),

    /// A required artifact could not be located.
    #[error("dependency not found: {0}")]
    DependencyNotFound(String),
}
