//! Validation engine: one verdict per standard column, in table order.

use std::collections::HashSet;

use tracing::{debug, info};

use geoqc_model::{
    AttributeSchema, ColumnDefinition, ColumnValidationResult, NOT_FOUND, TableDefinition,
    ValidationStatus,
};

use crate::error::{Result, ValidationError};
use crate::reconcile::reconcile;

/// Compare a standard table against the attribute schema of a file.
///
/// Fields are looked up by `column_id`, ignoring case. The returned verdicts
/// follow `table.columns` order exactly. Only a table that declares the same
/// column id twice is rejected; everything else becomes a verdict row.
pub fn validate(
    table: &TableDefinition,
    schema: &AttributeSchema,
) -> Result<Vec<ColumnValidationResult>> {
    check_unique_column_ids(table)?;

    let results: Vec<ColumnValidationResult> = table
        .columns
        .iter()
        .map(|column| validate_column(column, schema))
        .collect();

    let normal_count = results.iter().filter(|result| result.is_normal()).count();
    info!(
        table_id = %table.table_id,
        column_count = results.len(),
        field_count = schema.len(),
        normal_count,
        error_count = results.len() - normal_count,
        "validation complete"
    );
    Ok(results)
}

/// Produce the verdict for a single standard column.
pub fn validate_column(
    column: &ColumnDefinition,
    schema: &AttributeSchema,
) -> ColumnValidationResult {
    let Some(field) = schema.get(&column.column_id) else {
        debug!(column_id = %column.column_id, "field not found");
        return ColumnValidationResult {
            std_column_id: column.column_id.clone(),
            std_column_name: column.column_name.clone(),
            std_type: column.data_type.to_string(),
            std_length: column.length.clone(),
            found_field_name: NOT_FOUND.to_string(),
            field_found: false,
            cur_type: NOT_FOUND.to_string(),
            cur_length: NOT_FOUND.to_string(),
            type_correct: false,
            length_correct: false,
            status: ValidationStatus::Error,
        };
    };

    let outcome = reconcile(&column.data_type, column.declared_length(), field);
    let status = if outcome.is_normal() {
        ValidationStatus::Normal
    } else {
        ValidationStatus::Error
    };
    debug!(
        column_id = %column.column_id,
        std_type = %column.data_type,
        cur_type = %field.category,
        type_correct = outcome.type_correct,
        length_correct = outcome.length_correct,
        "column checked"
    );

    ColumnValidationResult {
        std_column_id: column.column_id.clone(),
        std_column_name: column.column_name.clone(),
        std_type: column.data_type.to_string(),
        std_length: column.length.clone(),
        found_field_name: column.column_id.clone(),
        field_found: true,
        cur_type: field.category.to_string(),
        cur_length: field.field_length().render(),
        type_correct: outcome.type_correct,
        length_correct: outcome.length_correct,
        status,
    }
}

fn check_unique_column_ids(table: &TableDefinition) -> Result<()> {
    let mut seen = HashSet::new();
    for column in &table.columns {
        if !seen.insert(column.column_id.to_ascii_uppercase()) {
            return Err(ValidationError::DuplicateColumnId {
                table_id: table.table_id.clone(),
                column_id: column.column_id.clone(),
            });
        }
    }
    Ok(())
}
