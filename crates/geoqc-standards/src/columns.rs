//! Column import from tab-separated text.
//!
//! Each non-blank line describes one column as `id, name, type, length`.

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use geoqc_model::{ColumnDefinition, StandardType};

use crate::error::Result;

/// Length used when a pasted line leaves the length cell empty.
pub const DEFAULT_COLUMN_LENGTH: &str = "50";

/// Parse pasted column rows.
///
/// Lines with fewer than two cells or an empty id are skipped. An empty name
/// becomes `Column_<n>`, an empty type `VARCHAR2` and an empty length
/// [`DEFAULT_COLUMN_LENGTH`].
pub fn parse_columns_tsv(text: &str) -> Result<Vec<ColumnDefinition>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut columns = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            if record.iter().any(|cell| !cell.is_empty()) {
                warn!(line = line + 1, "skipping column line with fewer than two cells");
            }
            continue;
        }
        let cell = |idx: usize| record.get(idx).filter(|value| !value.is_empty());

        let Some(column_id) = cell(0) else {
            warn!(line = line + 1, "skipping column line without an id");
            continue;
        };
        let column_name = cell(1)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Column_{}", columns.len()));
        let data_type = cell(2).unwrap_or(StandardType::VARCHAR2);
        let length = cell(3).unwrap_or(DEFAULT_COLUMN_LENGTH);

        columns.push(ColumnDefinition::new(column_id, column_name, data_type, length));
    }
    Ok(columns)
}
