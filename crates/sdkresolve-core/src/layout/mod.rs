//! Artifact directory layout validation.
//!
//! A pure filesystem check: no directories are created and nothing is
//! cached, so the check is safe to repeat. It is not atomic with later reads.

mod error;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

pub use error::LayoutError;

/// Sub-directories every fixed-layout platform root must contain.
pub const STANDARD_LAYOUT: [&str; 3] = ["Include", "Lib", "Redist"];

/// Confirm every name in `required` is a directory under `root`.
///
/// All missing names are reported together.
pub fn validate<I, S>(root: &Path, required: I) -> Result<(), LayoutError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !root.is_dir() {
        return Err(LayoutError::RootNotFound(root.to_path_buf()));
    }

    let missing: BTreeSet<String> = required
        .into_iter()
        .filter(|name| !root.join(name.as_ref()).is_dir())
        .map(|name| name.as_ref().to_string())
        .collect();

    if missing.is_empty() {
        debug!(root = %root.display(), "Layout validated");
        Ok(())
    } else {
        Err(LayoutError::Missing {
            root: root.to_path_buf(),
            missing,
        })
    }
}
