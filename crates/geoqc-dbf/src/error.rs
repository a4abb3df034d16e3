//! Error types for attribute table reading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a dBASE table header.
#[derive(Debug, Error)]
pub enum DbfError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Header ends before the declared header length.
    #[error("truncated header: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    /// Invalid dBASE header.
    #[error("invalid dBASE file: {message}")]
    InvalidFormat { message: String },

    /// Field descriptor array has no 0x0D terminator.
    #[error("field descriptor terminator not found")]
    MissingTerminator,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbfError {
    /// Create an InvalidFormat error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result type for attribute table operations.
pub type Result<T> = std::result::Result<T, DbfError>;
