//! The resolved dependency set handed to the build orchestrator.
//!
//! A `ResolvedDependencySet` is only ever built by a platform strategy after
//! each path has been confirmed on disk, so it exposes read accessors and no
//! setters. It does not hold any handle back to the filesystem.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Placeholder the build system expands to the target's output directory.
pub const TARGET_OUTPUT_DIR: &str = "$(TargetOutputDir)";

/// When a library is bound to the final binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBehavior {
    /// Passed to the linker.
    LinkTime,
    /// Loaded lazily by the runtime on first use.
    DelayLoaded,
}

/// A library file and how it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LibraryEntry {
    pub path: PathBuf,
    pub load: LoadBehavior,
}

/// Staging classification for a redistributable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StagedFileType {
    /// A binary the executable needs at runtime.
    SystemBinary,
    /// Debug symbols for a staged binary.
    DebugSymbol,
}

/// A file copied next to the final executable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuntimeDependency {
    /// Path relative to the target output directory.
    pub destination: PathBuf,
    /// Absolute path of the file to copy.
    pub source: PathBuf,
    pub kind: StagedFileType,
}

impl RuntimeDependency {
    /// Destination with the output directory placeholder prepended.
    pub fn staged_destination(&self) -> String {
        format!(
            "{TARGET_OUTPUT_DIR}/{}",
            self.destination.to_string_lossy().replace('\\', "/")
        )
    }
}

/// Include directories, libraries and redistributables for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedDependencySet {
    include_dirs: Vec<PathBuf>,
    libraries: Vec<LibraryEntry>,
    runtime_dependencies: Vec<RuntimeDependency>,
    confidential_platform: bool,
}

impl ResolvedDependencySet {
    pub(crate) const fn from_parts(
        include_dirs: Vec<PathBuf>,
        libraries: Vec<LibraryEntry>,
        runtime_dependencies: Vec<RuntimeDependency>,
        confidential_platform: bool,
    ) -> Self {
        Self {
            include_dirs,
            libraries,
            runtime_dependencies,
            confidential_platform,
        }
    }

    /// System include directories, in the order they should be searched.
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    pub fn libraries(&self) -> &[LibraryEntry] {
        &self.libraries
    }

    /// Libraries that are handed to the linker.
    pub fn link_libraries(&self) -> impl Iterator<Item = &Path> {
        self.libraries
            .iter()
            .filter(|lib| lib.load == LoadBehavior::LinkTime)
            .map(|lib| lib.path.as_path())
    }

    /// Libraries loaded lazily at runtime.
    pub fn delay_loaded_libraries(&self) -> impl Iterator<Item = &Path> {
        self.libraries
            .iter()
            .filter(|lib| lib.load == LoadBehavior::DelayLoaded)
            .map(|lib| lib.path.as_path())
    }

    pub fn runtime_dependencies(&self) -> &[RuntimeDependency] {
        &self.runtime_dependencies
    }

    /// Set for platforms whose artifacts are handled by tooling outside
    /// this tree.
    pub const fn is_confidential_platform(&self) -> bool {
        self.confidential_platform
    }

    /// Every filesystem path referenced by the set.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.include_dirs
            .iter()
            .map(PathBuf::as_path)
            .chain(self.libraries.iter().map(|lib| lib.path.as_path()))
            .chain(
                self.runtime_dependencies
                    .iter()
                    .map(|dep| dep.source.as_path()),
            )
    }

    /// True when nothing needs to be included, linked or staged.
    pub fn is_empty(&self) -> bool {
        self.include_dirs.is_empty()
            && self.libraries.is_empty()
            && self.runtime_dependencies.is_empty()
    }
}

impl fmt::Display for ResolvedDependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in &self.include_dirs {
            writeln!(f, "include = {}", dir.display())?;
        }
        for lib in &self.libraries {
            let label = match lib.load {
                LoadBehavior::LinkTime => "link",
                LoadBehavior::DelayLoaded => "delay_load",
            };
            writeln!(f, "{label} = {}", lib.path.display())?;
        }
        for dep in &self.runtime_dependencies {
            let label = match dep.kind {
                StagedFileType::SystemBinary => "stage",
                StagedFileType::DebugSymbol => "stage_debug",
            };
            writeln!(
                f,
                "{label} = {} <- {}",
                dep.staged_destination(),
                dep.source.display()
            )?;
        }
        write!(f, "confidential_platform = {}", self.confidential_platform)
    }
}
