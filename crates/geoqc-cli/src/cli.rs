//! CLI argument definitions for GeoQC.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use geoqc_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "geoqc",
    version,
    about = "GeoQC - Check shapefile attribute tables against standard table definitions",
    long_about = "Check the attribute schema of shapefiles against the standard tables of a \
                  GeoQC project.\n\n\
                  Every standard column gets a verdict: field present, type matching and \
                  length matching. Results can be exported as JSON or CSV reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a shapefile (or .dbf table) against its standard table.
    Validate(ValidateArgs),

    /// Print the attribute fields of a shapefile (or .dbf table).
    Fields(FieldsArgs),

    /// List the categories and tables of a project.
    Tables(ProjectArgs),

    /// Create an empty project file.
    NewProject(NewProjectArgs),

    /// Add an empty standard table to a project.
    AddTable(AddTableArgs),

    /// Remove a standard table from a project.
    RemoveTable(RemoveTableArgs),

    /// Change the id or name of a standard table.
    EditTable(EditTableArgs),

    /// Append columns from tab-separated text to a project table.
    ImportColumns(ImportColumnsArgs),
}

/// Project file selection shared by commands that read a project.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project file (.pgs). Falls back to the GEOQC_PROJECT environment variable.
    #[arg(long = "project", short = 'p', value_name = "PROJECT")]
    pub project: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Shapefile (.shp) or attribute table (.dbf) to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Also write a report in this format.
    #[arg(long = "report", value_enum)]
    pub report: Option<ReportFormatArg>,

    /// Report path or directory (default: GeoQC_Report_<timestamp> in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH", requires = "report")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Shapefile (.shp) or attribute table (.dbf) to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct NewProjectArgs {
    /// Project name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Where to write the project file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Replace an existing file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct AddTableArgs {
    /// Table id; must equal the base name of the files it checks.
    #[arg(value_name = "TABLE_ID")]
    pub table_id: String,

    /// Display name of the table.
    #[arg(value_name = "TABLE_NAME")]
    pub table_name: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser)]
pub struct RemoveTableArgs {
    /// Table to remove.
    #[arg(value_name = "TABLE_ID")]
    pub table_id: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser)]
pub struct EditTableArgs {
    /// Table to edit.
    #[arg(value_name = "TABLE_ID")]
    pub table_id: String,

    /// New table id.
    #[arg(long = "id", value_name = "NEW_ID", required_unless_present = "name")]
    pub id: Option<String>,

    /// New display name.
    #[arg(long = "name", value_name = "NEW_NAME")]
    pub name: Option<String>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser)]
pub struct ImportColumnsArgs {
    /// Tab-separated file with `id, name, type, length` per line.
    #[arg(value_name = "TSV")]
    pub tsv: PathBuf,

    /// Table receiving the columns.
    #[arg(long = "table", short = 't', value_name = "TABLE_ID")]
    pub table: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Json,
    Csv,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Csv => ReportFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
