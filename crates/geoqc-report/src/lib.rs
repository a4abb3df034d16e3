//! Validation report generation.
//!
//! - **Report data**: run metadata plus summary counts over a verdict list
//! - **JSON**: the full report as pretty-printed JSON
//! - **CSV**: one row per verdict, suited for spreadsheets

mod data;
mod error;
pub mod export;

pub use data::{ReportData, build};
pub use error::{ReportError, Result};
pub use export::{
    CsvExporter, JsonExporter, ReportExporter, ReportFormat, default_report_file_name,
};
