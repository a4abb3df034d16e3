//! Binding between a loaded file and its standard table.
//!
//! The standard for a file is the table whose id equals the file base name,
//! ignoring ASCII case. There is no fuzzy matching.

use std::path::Path;

use tracing::debug;

use geoqc_model::{AttributeSchema, ColumnValidationResult, ProjectDefinition, TableDefinition};

use crate::engine::validate;
use crate::error::{Result, ValidationError};

/// Base name of a file without its extension (`roads.shp` -> `roads`).
pub fn file_id(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::InvalidFilePath {
            path: path.to_path_buf(),
        })
}

/// Find the standard table bound to a file.
pub fn find_table_for_file<'a>(
    project: &'a ProjectDefinition,
    path: &Path,
) -> Result<&'a TableDefinition> {
    let file_id = file_id(path)?;
    let table = project
        .tables()
        .find(|table| table.matches_file_id(&file_id))
        .ok_or(ValidationError::NoMatchingTable { file_id })?;
    debug!(table_id = %table.table_id, path = %path.display(), "matched standard table");
    Ok(table)
}

/// Verdicts for a file together with the table they were checked against.
#[derive(Debug, Clone)]
pub struct FileValidation<'a> {
    pub table: &'a TableDefinition,
    pub results: Vec<ColumnValidationResult>,
}

impl FileValidation<'_> {
    pub fn normal_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_normal()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.len() - self.normal_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Resolve the standard table for `path` and validate `schema` against it.
pub fn validate_file<'a>(
    project: &'a ProjectDefinition,
    path: &Path,
    schema: &AttributeSchema,
) -> Result<FileValidation<'a>> {
    let table = find_table_for_file(project, path)?;
    let results = validate(table, schema)?;
    Ok(FileValidation { table, results })
}
