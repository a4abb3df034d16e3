use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a validation run before any verdict is produced.
///
/// Column-level problems (missing field, wrong type, wrong length) are never
/// reported here; they become `Error` verdict rows.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("table {table_id} declares column {column_id} more than once")]
    DuplicateColumnId { table_id: String, column_id: String },

    #[error("no standard table matches file id {file_id}")]
    NoMatchingTable { file_id: String },

    #[error("cannot derive a file id from {path}")]
    InvalidFilePath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
