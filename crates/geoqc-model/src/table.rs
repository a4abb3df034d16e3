use serde::{Deserialize, Serialize};

use crate::enums::StandardType;
use crate::length::FieldLength;

/// One expected column of a standard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Binding key to the actual attribute field (not the display name).
    pub column_id: String,
    pub column_name: String,
    pub data_type: StandardType,
    /// Declared length text, `"N"` or `"N,S"`, kept as written.
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub key_type: String,
}

impl ColumnDefinition {
    pub fn new(
        column_id: impl Into<String>,
        column_name: impl Into<String>,
        data_type: impl Into<StandardType>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            column_name: column_name.into(),
            data_type: data_type.into(),
            length: length.into(),
            not_null: false,
            key_type: String::new(),
        }
    }

    /// Declared length decoded by the length codec.
    pub fn declared_length(&self) -> FieldLength {
        FieldLength::parse(&self.length)
    }
}

/// A named, ordered collection of expected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub table_id: String,
    pub table_name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(table_id: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = columns;
        self
    }

    /// True when this table is the standard for a file with the given base
    /// name. Exact match, ignoring ASCII case.
    pub fn matches_file_id(&self, file_id: &str) -> bool {
        self.table_id.eq_ignore_ascii_case(file_id.trim())
    }

    /// Return the column whose id matches (case-insensitive).
    pub fn column(&self, column_id: &str) -> Option<&ColumnDefinition> {
        self.columns
            .iter()
            .find(|column| column.column_id.eq_ignore_ascii_case(column_id))
    }
}
