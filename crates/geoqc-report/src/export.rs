//! Report exporters.
//!
//! Exporters only read [`ReportData`]; they never look at schemas or
//! re-run validation.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Local};
use tracing::info;

use crate::data::ReportData;
use crate::error::{ReportError, Result};

/// Column headers of the verdict table, in output order.
pub const RESULT_COLUMNS: [&str; 9] = [
    "Status",
    "Std Column ID",
    "Std Column Name",
    "Std Type",
    "Std Length",
    "Found Field",
    "File Type",
    "File Length",
    "Remarks",
];

/// A destination format for validation reports.
pub trait ReportExporter {
    /// Human-readable exporter name.
    fn name(&self) -> &str;

    /// File extension without the leading dot.
    fn file_extension(&self) -> &str;

    /// Render the report into `out`.
    fn export(&self, data: &ReportData, out: &mut dyn Write) -> Result<()>;

    /// Render the report into a new file at `path`, replacing any existing file.
    fn export_to_path(&self, data: &ReportData, path: &Path) -> Result<()> {
        let io_error = |source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        self.export(data, &mut writer)?;
        writer.flush().map_err(io_error)?;
        info!(
            exporter = self.name(),
            path = %path.display(),
            rows = data.total_count(),
            "report written"
        );
        Ok(())
    }
}

/// Full report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn export(&self, data: &ReportData, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, data)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Verdict table as CSV: one header row, then one row per standard column.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn name(&self) -> &str {
        "CSV"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn export(&self, data: &ReportData, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(RESULT_COLUMNS)?;
        for result in data.results() {
            writer.write_record([
                result.status.as_str(),
                result.std_column_id.as_str(),
                result.std_column_name.as_str(),
                result.std_type.as_str(),
                result.std_length.as_str(),
                result.found_field_name.as_str(),
                result.cur_type.as_str(),
                result.cur_length.as_str(),
                result.remarks().unwrap_or(""),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Json, ReportFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn exporter(&self) -> Box<dyn ReportExporter> {
        match self {
            ReportFormat::Json => Box::new(JsonExporter),
            ReportFormat::Csv => Box::new(CsvExporter),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ReportError::UnknownFormat(trimmed.to_string()))
    }
}

/// Default file name for a report: `GeoQC_Report_<yyyyMMdd_HHmmss>.<ext>`.
pub fn default_report_file_name(exporter: &dyn ReportExporter, now: DateTime<Local>) -> String {
    format!(
        "GeoQC_Report_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        exporter.file_extension()
    )
}
