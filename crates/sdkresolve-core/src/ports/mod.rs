//! Port definitions (trait abstractions) for capabilities the host supplies.
//!
//! # Design Rules
//!
//! - Strategies depend on these traits, never on the process environment or
//!   a specific host build tool
//! - Every port has a trivial implementation usable in tests

pub mod environment;
pub mod extension_lookup;

pub use environment::{EnvironmentSource, MapEnvironment, ProcessEnvironment};
pub use extension_lookup::{ExtensionLookup, ExtensionSdkDir, NoExtensions};
