//! Report data: a read-only snapshot of one validation run.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use geoqc_model::ColumnValidationResult;

use crate::error::{ReportError, Result};

/// Everything an exporter needs to render a report.
///
/// Counts are computed once in [`build`] and never recomputed, so the
/// summary always agrees with `results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    report_timestamp: DateTime<Local>,
    source_file_name: String,
    project_name: String,
    total_count: usize,
    normal_count: usize,
    error_count: usize,
    success_rate_percent: f64,
    results: Vec<ColumnValidationResult>,
}

/// Summarize a verdict list for export.
///
/// Fails when there is nothing to report.
pub fn build(
    results: Vec<ColumnValidationResult>,
    source_file_name: impl Into<String>,
    project_name: impl Into<String>,
    now: DateTime<Local>,
) -> Result<ReportData> {
    if results.is_empty() {
        return Err(ReportError::EmptyResults);
    }

    let total_count = results.len();
    let normal_count = results.iter().filter(|result| result.is_normal()).count();
    let error_count = total_count - normal_count;
    let success_rate_percent = 100.0 * normal_count as f64 / total_count as f64;

    let data = ReportData {
        report_timestamp: now,
        source_file_name: source_file_name.into(),
        project_name: project_name.into(),
        total_count,
        normal_count,
        error_count,
        success_rate_percent,
        results,
    };
    debug!(
        source_file = %data.source_file_name,
        total_count,
        normal_count,
        error_count,
        "report data built"
    );
    Ok(data)
}

impl ReportData {
    pub fn report_timestamp(&self) -> DateTime<Local> {
        self.report_timestamp
    }

    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn results(&self) -> &[ColumnValidationResult] {
        &self.results
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn normal_count(&self) -> usize {
        self.normal_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn success_rate_percent(&self) -> f64 {
        self.success_rate_percent
    }

    /// Success rate rounded to a whole percent, e.g. `"70%"`.
    pub fn success_rate_display(&self) -> String {
        format!("{}%", self.success_rate_percent.round())
    }
}
