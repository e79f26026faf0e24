//! Accumulates a `ResolvedDependencySet`, confirming each path on disk as
//! it is added.

use std::path::{Path, PathBuf};

use crate::domain::{
    LibraryEntry, LoadBehavior, ResolvedDependencySet, RuntimeDependency, StagedFileType,
};

use super::error::StrategyError;

pub(crate) fn require_dir(path: PathBuf) -> Result<PathBuf, StrategyError> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(StrategyError::DependencyNotFound(format!(
            "directory {}",
            path.display()
        )))
    }
}

pub(crate) fn require_file(path: PathBuf) -> Result<PathBuf, StrategyError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(StrategyError::DependencyNotFound(format!(
            "file {}",
            path.display()
        )))
    }
}

#[derive(Debug, Default)]
pub(crate) struct DependencySetBuilder {
    include_dirs: Vec<PathBuf>,
    libraries: Vec<LibraryEntry>,
    runtime_dependencies: Vec<RuntimeDependency>,
    confidential_platform: bool,
}

impl DependencySetBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn include_dir(&mut self, dir: PathBuf) -> Result<(), StrategyError> {
        let dir = require_dir(dir)?;
        if !self.include_dirs.contains(&dir) {
            self.include_dirs.push(dir);
        }
        Ok(())
    }

    pub(crate) fn link_library(&mut self, path: PathBuf) -> Result<(), StrategyError> {
        self.library(path, LoadBehavior::LinkTime)
    }

    pub(crate) fn delay_load_library(&mut self, path: PathBuf) -> Result<(), StrategyError> {
        self.library(path, LoadBehavior::DelayLoaded)
    }

    fn library(&mut self, path: PathBuf, load: LoadBehavior) -> Result<(), StrategyError> {
        let path = require_file(path)?;
        self.libraries.push(LibraryEntry { path, load });
        Ok(())
    }

    /// Stage `source` into the output directory under its own file name.
    pub(crate) fn stage(
        &mut self,
        source: PathBuf,
        kind: StagedFileType,
    ) -> Result<(), StrategyError> {
        let source = require_file(source)?;
        let destination = source
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| StrategyError::DependencyNotFound(source.display().to_string()))?;
        self.runtime_dependencies.push(RuntimeDependency {
            destination,
            source,
            kind,
        });
        Ok(())
    }

    /// Stage `<dir>/<stem>.<binary_ext>` and its `<stem>.<symbol_ext>`.
    pub(crate) fn stage_with_symbols(
        &mut self,
        dir: &Path,
        stem: &str,
        binary_ext: &str,
        symbol_ext: &str,
    ) -> Result<(), StrategyError> {
        self.stage(
            dir.join(format!("{stem}.{binary_ext}")),
            StagedFileType::SystemBinary,
        )?;
        self.stage(
            dir.join(format!("{stem}.{symbol_ext}")),
            StagedFileType::DebugSymbol,
        )
    }

    pub(crate) const fn mark_confidential(&mut self) {
        self.confidential_platform = true;
    }

    pub(crate) fn build(self) -> ResolvedDependencySet {
        ResolvedDependencySet::from_parts(
            self.include_dirs,
            self.libraries,
            self.runtime_dependencies,
            self.confidential_platform,
        )
    }
}
