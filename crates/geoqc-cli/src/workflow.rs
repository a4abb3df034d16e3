//! End-to-end steps behind the CLI commands.
//!
//! Each step takes explicit paths and timestamps so it can be driven from
//! tests without touching global state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::{info, info_span};

use geoqc_dbf::read_attribute_schema;
use geoqc_model::{ProjectDefinition, TableDefinition};
use geoqc_report::{ReportData, ReportFormat, build, default_report_file_name};
use geoqc_standards::{load_project, parse_columns_tsv, save_project};
use geoqc_validate::validate_file;

/// Outcome of validating one file against its standard table.
#[derive(Debug)]
pub struct ValidationRun {
    pub table_id: String,
    pub table_name: String,
    pub report: ReportData,
}

impl ValidationRun {
    pub fn has_errors(&self) -> bool {
        self.report.error_count() > 0
    }
}

/// Validate the attribute table of `path` against the matching project table.
pub fn validate_path(
    project: &ProjectDefinition,
    path: &Path,
    now: DateTime<Local>,
) -> Result<ValidationRun> {
    let span = info_span!("validate", file = %path.display());
    let _guard = span.enter();

    let schema = read_attribute_schema(path)
        .with_context(|| format!("read attribute table for {}", path.display()))?;
    let outcome = validate_file(project, path, &schema)
        .with_context(|| format!("validate {}", path.display()))?;

    let source_file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let report = build(
        outcome.results,
        source_file_name,
        project.project_name.as_str(),
        now,
    )
    .with_context(|| format!("table {} declares no columns", outcome.table.table_id))?;

    Ok(ValidationRun {
        table_id: outcome.table.table_id.clone(),
        table_name: outcome.table.table_name.clone(),
        report,
    })
}

/// Write a report and return where it went.
///
/// Without `output` the report lands in the current directory under its
/// default name; an existing directory gets the default name appended.
pub fn write_report(
    report: &ReportData,
    format: ReportFormat,
    output: Option<&Path>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let exporter = format.exporter();
    let default_name = default_report_file_name(exporter.as_ref(), now);
    let path = match output {
        Some(path) if path.is_dir() => path.join(default_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    };
    exporter
        .export_to_path(report, &path)
        .with_context(|| format!("write {} report", exporter.name()))?;
    Ok(path)
}

/// Add an empty table to the project file.
pub fn add_table(project_path: &Path, table_id: &str, table_name: &str) -> Result<()> {
    let mut project = load_project(project_path)
        .with_context(|| format!("load project {}", project_path.display()))?;
    project
        .add_table(TableDefinition::new(table_id.trim(), table_name.trim()))
        .context("add table")?;
    save_project(&project, project_path)
        .with_context(|| format!("save project {}", project_path.display()))?;
    info!(table_id, "table added");
    Ok(())
}

/// Remove a table from the project file. Returns the removed table's id.
pub fn remove_table(project_path: &Path, table_id: &str) -> Result<String> {
    let mut project = load_project(project_path)
        .with_context(|| format!("load project {}", project_path.display()))?;
    let removed = project
        .remove_table(table_id.trim())
        .context("remove table")?;
    save_project(&project, project_path)
        .with_context(|| format!("save project {}", project_path.display()))?;
    info!(table_id = %removed.table_id, columns = removed.columns.len(), "table removed");
    Ok(removed.table_id)
}

/// Change a table's id and name in the project file.
///
/// A missing `new_id` or `new_name` keeps the current value.
pub fn edit_table(
    project_path: &Path,
    table_id: &str,
    new_id: Option<&str>,
    new_name: Option<&str>,
) -> Result<()> {
    let mut project = load_project(project_path)
        .with_context(|| format!("load project {}", project_path.display()))?;
    let table_id = table_id.trim();
    let current = project
        .table(table_id)
        .map(|table| (table.table_id.clone(), table.table_name.clone()))
        .with_context(|| format!("unknown table: {table_id}"))?;
    let new_id = new_id.unwrap_or(current.0.as_str());
    let new_name = new_name.unwrap_or(current.1.as_str());
    project
        .rename_table(table_id, new_id, new_name)
        .context("edit table")?;
    save_project(&project, project_path)
        .with_context(|| format!("save project {}", project_path.display()))?;
    info!(old_id = %current.0, new_id = new_id.trim(), "table edited");
    Ok(())
}

/// Append columns from a tab-separated file to a project table.
///
/// Returns the number of imported columns and the table's new column count.
pub fn import_columns(
    project_path: &Path,
    tsv_path: &Path,
    table_id: &str,
) -> Result<(usize, usize)> {
    let text = fs::read_to_string(tsv_path)
        .with_context(|| format!("read column list {}", tsv_path.display()))?;
    let columns = parse_columns_tsv(&text)
        .with_context(|| format!("parse column list {}", tsv_path.display()))?;
    let imported = columns.len();

    let mut project = load_project(project_path)
        .with_context(|| format!("load project {}", project_path.display()))?;
    let total = project
        .add_columns(table_id, columns)
        .context("append columns")?;
    save_project(&project, project_path)
        .with_context(|| format!("save project {}", project_path.display()))?;
    info!(table_id, imported, total, "columns imported");
    Ok((imported, total))
}
