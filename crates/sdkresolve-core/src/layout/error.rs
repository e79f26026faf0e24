//! Layout validation errors.

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported when an artifact root does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The artifact root itself does not exist or is not a directory.
    #[error("artifact root {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// One or more required sub-directories are missing.
    #[error("missing required directories under {}: {}", .root.display(), join(.missing))]
    Missing {
        root: PathBuf,
        missing: BTreeSet<String>,
    },
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
