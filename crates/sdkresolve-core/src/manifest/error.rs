//! Manifest parsing errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two versioned packages a manifest entry provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// The core networking package (Party).
    Party,
    /// The multiplayer/matchmaking package.
    Multiplayer,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Party => f.write_str("party"),
            Self::Multiplayer => f.write_str("multiplayer"),
        }
    }
}

/// Errors that can occur while reading a package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line declared a package in the vendor namespace.
    #[error("manifest declares no vendor packages")]
    NoRelevantEntries,

    /// A vendor package matched neither known package keyword.
    #[error("unknown package id '{0}'")]
    UnknownPackage(String),

    /// A vendor package line carried no `version="..."` token.
    #[error("package '{0}' has no version attribute")]
    MissingVersion(String),

    /// Vendor packages were declared but one required package was not.
    #[error("manifest does not declare the {0} package")]
    MissingPackage(PackageKind),
}
