//! Common test utilities.
//!
//! Builds throwaway plugin checkouts and host SDK installs on disk.

pub mod fixtures;
