//! CLI-specific error types and exit code mapping.

use buildprobe_core::{BuildError, DriverError, StatusError, VendorError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unsupported build vendor; the message carries the supported list.
    #[error("{0}")]
    Vendor(String),

    /// Container build could not start or failed.
    #[error("{0}")]
    Build(String),

    /// A status file exists but is not a valid record.
    #[error("Invalid status file: {0}")]
    Status(String),

    /// IO error (unwritable status path, unreadable file).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid arguments (reported by clap before dispatch)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Vendor(_) | CliError::Build(_) => 1,
            CliError::Status(_) => 65, // EX_DATAERR
            CliError::Io(_) => 74,     // EX_IOERR
        }
    }
}

impl From<VendorError> for CliError {
    fn from(err: VendorError) -> Self {
        CliError::Vendor(err.to_string())
    }
}

impl From<BuildError> for CliError {
    fn from(err: BuildError) -> Self {
        CliError::Build(err.to_string())
    }
}

impl From<DriverError> for CliError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::Vendor(e) => e.into(),
            DriverError::Build(e) => e.into(),
        }
    }
}

impl From<StatusError> for CliError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::Io { .. } => CliError::Io(err.to_string()),
            other => CliError::Status(other.to_string()),
        }
    }
}

/// Exit code for an error returned from a handler.
///
/// Errors that did not originate as a [`CliError`] are general failures.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
