//! Everything the build orchestrator needs to wire the online subsystem
//! module for one platform.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::dependency_set::ResolvedDependencySet;
use super::platform::PlatformId;

/// Module dependency names and compile definitions plus the resolved
/// native dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleConfiguration {
    pub platform: PlatformId,
    pub is_pc: bool,
    pub public_dependency_modules: Vec<String>,
    pub private_dependency_modules: Vec<String>,
    pub public_definitions: BTreeMap<String, String>,
    pub private_definitions: BTreeMap<String, String>,
    pub dependencies: ResolvedDependencySet,
}

impl ModuleConfiguration {
    /// Definitions rendered as `NAME=VALUE`, public ones first.
    pub fn definition_lines(&self) -> Vec<String> {
        self.public_definitions
            .iter()
            .chain(self.private_definitions.iter())
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }
}

impl fmt::Display for ModuleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "is_pc = {}", self.is_pc)?;
        for module in &self.public_dependency_modules {
            writeln!(f, "public_module = {module}")?;
        }
        for module in &self.private_dependency_modules {
            writeln!(f, "private_module = {module}")?;
        }
        for (name, value) in &self.public_definitions {
            writeln!(f, "public_definition = {name}={value}")?;
        }
        for (name, value) in &self.private_definitions {
            writeln!(f, "private_definition = {name}={value}")?;
        }
        write!(f, "{}", self.dependencies)
    }
}
