use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown table: {0}")]
    UnknownTable(String),
    #[error("duplicate table id: {0}")]
    DuplicateTableId(String),
    #[error("table {field} must not be blank")]
    BlankTableField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
