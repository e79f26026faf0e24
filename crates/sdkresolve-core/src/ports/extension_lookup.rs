//! Host extension directory lookup port.
//!
//! Console SDKs installed through the host build tool expose per-extension
//! directories. The resolver never locates these itself; the caller injects
//! a lookup so any host (or a fake in tests) can supply them.

use std::path::{Path, PathBuf};

/// Locate an installed extension SDK.
pub trait ExtensionLookup: Send + Sync {
    /// Directory of extension `name`.
    ///
    /// With `for_redistribution` set, returns the directory holding the
    /// files staged next to the executable; otherwise the development
    /// directory holding headers and import libraries. `None` when the
    /// extension is not installed.
    fn extension_dir(&self, name: &str, for_redistribution: bool) -> Option<PathBuf>;
}

impl<F> ExtensionLookup for F
where
    F: Fn(&str, bool) -> Option<PathBuf> + Send + Sync,
{
    fn extension_dir(&self, name: &str, for_redistribution: bool) -> Option<PathBuf> {
        self(name, for_redistribution)
    }
}

/// A host with no extension SDKs installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtensions;

impl ExtensionLookup for NoExtensions {
    fn extension_dir(&self, _name: &str, _for_redistribution: bool) -> Option<PathBuf> {
        None
    }
}

/// Extension SDKs unpacked side by side under one directory.
///
/// `<root>/<name>` is the development directory and `<root>/<name>/Redist`
/// the redistribution directory.
#[derive(Debug, Clone)]
pub struct ExtensionSdkDir {
    root: PathBuf,
}

impl ExtensionSdkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ExtensionLookup for ExtensionSdkDir {
    fn extension_dir(&self, name: &str, for_redistribution: bool) -> Option<PathBuf> {
        let base = self.root.join(name);
        let dir = if for_redistribution {
            base.join("Redist")
        } else {
            base
        };
        dir.is_dir().then_some(dir)
    }
}
