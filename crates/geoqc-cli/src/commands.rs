use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::info;

use geoqc_cli::workflow::{
    ValidationRun, add_table, edit_table, import_columns, remove_table, validate_path,
    write_report,
};
use geoqc_dbf::{DbfHeader, read_header};
use geoqc_model::ProjectDefinition;
use geoqc_standards::{create_project, load_project, resolve_project_path, save_project};

use crate::cli::{
    AddTableArgs, EditTableArgs, FieldsArgs, ImportColumnsArgs, NewProjectArgs, ProjectArgs,
    RemoveTableArgs, ValidateArgs,
};

pub fn run_validate(args: &ValidateArgs) -> Result<(ValidationRun, Option<PathBuf>)> {
    let project = open_project(&args.project)?;
    let now = Local::now();
    let run = validate_path(&project, &args.file, now)?;
    let report_path = match args.report {
        Some(format) => Some(write_report(
            &run.report,
            format.into(),
            args.output.as_deref(),
            now,
        )?),
        None => None,
    };
    Ok((run, report_path))
}

pub fn run_fields(args: &FieldsArgs) -> Result<DbfHeader> {
    read_header(&args.file)
        .with_context(|| format!("read attribute table for {}", args.file.display()))
}

pub fn run_tables(args: &ProjectArgs) -> Result<ProjectDefinition> {
    open_project(args)
}

pub fn run_new_project(args: &NewProjectArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to replace it)",
            args.path.display()
        );
    }
    let project = create_project(args.name.trim(), Local::now());
    save_project(&project, &args.path)
        .with_context(|| format!("save project {}", args.path.display()))?;
    println!("Created project {} at {}", project.project_name, args.path.display());
    Ok(())
}

pub fn run_add_table(args: &AddTableArgs) -> Result<()> {
    let project_path = resolve_project_path(args.project.project.as_deref())?;
    add_table(&project_path, &args.table_id, &args.table_name)?;
    println!("Added table {} to {}", args.table_id.trim(), project_path.display());
    Ok(())
}

pub fn run_remove_table(args: &RemoveTableArgs) -> Result<()> {
    let project_path = resolve_project_path(args.project.project.as_deref())?;
    let removed = remove_table(&project_path, &args.table_id)?;
    println!("Removed table {removed} from {}", project_path.display());
    Ok(())
}

pub fn run_edit_table(args: &EditTableArgs) -> Result<()> {
    let project_path = resolve_project_path(args.project.project.as_deref())?;
    edit_table(
        &project_path,
        &args.table_id,
        args.id.as_deref(),
        args.name.as_deref(),
    )?;
    println!("Updated table {} in {}", args.table_id.trim(), project_path.display());
    Ok(())
}

pub fn run_import_columns(args: &ImportColumnsArgs) -> Result<()> {
    let project_path = resolve_project_path(args.project.project.as_deref())?;
    let (imported, total) = import_columns(&project_path, &args.tsv, &args.table)?;
    println!(
        "Imported {imported} columns into {} ({total} columns)",
        args.table
    );
    Ok(())
}

fn open_project(args: &ProjectArgs) -> Result<ProjectDefinition> {
    let path = resolve_project_path(args.project.as_deref())?;
    info!(path = %path.display(), "opening project");
    load_project(&path).with_context(|| format!("load project {}", path.display()))
}
