//! CLI-specific error types and mappings.
//!
//! Maps resolution failures to exit codes and user-facing messages.

use sdkresolve_core::{ErrorKind, ResolutionError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error, including an unsupported platform tag.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Host environment is missing something the platform needs.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required directory or file is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Manifest content could not be used.
    #[error("Invalid data: {0}")]
    Data(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Data(_) => 65,      // EX_DATAERR
            Self::NotFound(_) => 66,  // EX_NOINPUT
            Self::Output(_) => 74,    // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<ResolutionError> for CliError {
    fn from(err: ResolutionError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::UnsupportedPlatform => Self::Arguments(message),
            ErrorKind::MissingEnvironment => Self::Config(message),
            ErrorKind::Layout | ErrorKind::DependencyNotFound => Self::NotFound(message),
            ErrorKind::Manifest => Self::Data(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
