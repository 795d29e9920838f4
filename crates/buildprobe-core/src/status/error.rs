//! Status file error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur encoding, parsing or persisting status records.
#[derive(Debug, Error)]
pub enum StatusError {
    /// A key is empty or contains `=`, whitespace or a line break.
    #[error("Invalid status key {key:?}")]
    InvalidKey { key: String },

    /// A value contains a line break and cannot be written unescaped.
    #[error("Value for {key} cannot be written as KEY=VALUE: {value:?}")]
    InvalidValue { key: String, value: String },

    /// A line in a status file has no `=` separator.
    #[error("Malformed status line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    /// A required key is absent from a record.
    #[error("Missing status key {0}")]
    MissingKey(String),

    /// A flag is not `0` or `1`.
    #[error("Invalid flag value for {key}: {value:?} (expected 0 or 1)")]
    InvalidFlag { key: String, value: String },

    /// Reading or writing the status file failed.
    #[error("Failed to access status file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// JSON export failed.
    #[error("Failed to serialize status: {0}")]
    Serialize(String),
}
