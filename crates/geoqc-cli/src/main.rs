//! GeoQC command line.

use clap::{ColorChoice, Parser};
use geoqc_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_add_table, run_edit_table, run_fields, run_import_columns, run_new_project,
    run_remove_table, run_tables, run_validate,
};
use crate::summary::{print_fields, print_tables, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Validate(args) => run_validate(args).map(|(run, report_path)| {
            print_validation(&run, report_path.as_deref());
            if run.has_errors() { 1 } else { 0 }
        }),
        Command::Fields(args) => run_fields(args).map(|header| {
            print_fields(&args.file, &header);
            0
        }),
        Command::Tables(args) => run_tables(args).map(|project| {
            print_tables(&project);
            0
        }),
        Command::NewProject(args) => run_new_project(args).map(|()| 0),
        Command::AddTable(args) => run_add_table(args).map(|()| 0),
        Command::RemoveTable(args) => run_remove_table(args).map(|()| 0),
        Command::EditTable(args) => run_edit_table(args).map(|()| 0),
        Command::ImportColumns(args) => run_import_columns(args).map(|()| 0),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
