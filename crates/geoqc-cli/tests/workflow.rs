//! Integration tests for the CLI workflow steps.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use geoqc_cli::workflow::{
    add_table, edit_table, import_columns, remove_table, validate_path, write_report,
};
use geoqc_model::{ColumnDefinition, TableDefinition, ValidationStatus};
use geoqc_report::ReportFormat;
use geoqc_standards::{create_project, load_project, save_project};

fn now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 1, 9, 30, 5)
        .single()
        .expect("valid timestamp")
}

fn write_dbf(path: &Path, fields: &[(&str, u8, u8, u8)]) {
    let header_length = (32 + fields.len() * 32 + 1) as u16;
    let mut data = vec![0u8; 32];
    data[0] = 0x03;
    data[1] = 125;
    data[2] = 1;
    data[3] = 15;
    data[8..10].copy_from_slice(&header_length.to_le_bytes());
    for (name, type_code, length, decimals) in fields {
        let mut descriptor = [0u8; 32];
        descriptor[..name.len()].copy_from_slice(name.as_bytes());
        descriptor[11] = *type_code;
        descriptor[16] = *length;
        descriptor[17] = *decimals;
        data.extend_from_slice(&descriptor);
    }
    data.push(0x0D);
    fs::write(path, data).expect("write dbf");
}

fn parcel_project(path: &Path) {
    let mut project = create_project("Survey", now());
    project
        .add_table(TableDefinition::new("PARCEL", "Parcels").with_columns(vec![
            ColumnDefinition::new("PNU", "Parcel number", "VARCHAR2", "19"),
            ColumnDefinition::new("AREA", "Area", "NUMBER", "9,2"),
            ColumnDefinition::new("OWNER", "Owner", "VARCHAR2", "50"),
        ]))
        .expect("add table");
    save_project(&project, path).expect("save project");
}

#[test]
fn validates_shapefile_against_its_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    parcel_project(&project_path);
    write_dbf(
        &dir.path().join("parcel.dbf"),
        &[("PNU", b'C', 19, 0), ("AREA", b'N', 9, 0)],
    );

    let project = load_project(&project_path).expect("load project");
    let run = validate_path(&project, &dir.path().join("parcel.shp"), now()).expect("validate");

    assert_eq!(run.table_id, "PARCEL");
    assert!(run.has_errors());
    let report = &run.report;
    assert_eq!(report.source_file_name(), "parcel.shp");
    assert_eq!(report.project_name(), "Survey");
    assert_eq!(report.total_count(), 3);
    assert_eq!(report.normal_count(), 1);

    let statuses: Vec<ValidationStatus> = report.results().iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        [
            ValidationStatus::Normal,
            ValidationStatus::Error,
            ValidationStatus::Error
        ]
    );
    assert_eq!(report.results()[1].remarks(), Some("length mismatch"));
    assert_eq!(report.results()[2].remarks(), Some("field not found"));
}

#[test]
fn unmatched_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    parcel_project(&project_path);
    write_dbf(&dir.path().join("road.dbf"), &[("NAME", b'C', 50, 0)]);

    let project = load_project(&project_path).expect("load project");
    let error = validate_path(&project, &dir.path().join("road.shp"), now())
        .expect_err("no matching table");
    assert!(format!("{error:#}").contains("no standard table matches file id road"));
}

#[test]
fn report_goes_into_output_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    parcel_project(&project_path);
    write_dbf(&dir.path().join("PARCEL.dbf"), &[("PNU", b'C', 19, 0)]);

    let project = load_project(&project_path).expect("load project");
    let run = validate_path(&project, &dir.path().join("PARCEL.dbf"), now()).expect("validate");
    let path = write_report(&run.report, ReportFormat::Json, Some(dir.path()), now())
        .expect("write report");

    assert_eq!(path, dir.path().join("GeoQC_Report_20250301_093005.json"));
    let text = fs::read_to_string(&path).expect("read report");
    assert!(text.contains("\"source_file_name\": \"PARCEL.dbf\""));
}

#[test]
fn tables_and_columns_are_added_to_the_project_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    save_project(&create_project("Survey", now()), &project_path).expect("save project");

    add_table(&project_path, "ROAD", "Roads").expect("add table");
    assert!(add_table(&project_path, "road", "Roads again").is_err());

    let tsv_path = dir.path().join("columns.tsv");
    fs::write(&tsv_path, "RN\tRoad name\tVARCHAR2\t100\nWIDTH\tWidth\tNUMBER\t5,1\n")
        .expect("write tsv");
    let (imported, total) = import_columns(&project_path, &tsv_path, "road").expect("import");
    assert_eq!((imported, total), (2, 2));

    let project = load_project(&project_path).expect("reload");
    let road = project.table("ROAD").expect("road table");
    assert_eq!(road.columns[1].column_id, "WIDTH");
    assert_eq!(road.columns[1].length, "5,1");
}

#[test]
fn blank_table_ids_are_not_saved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    save_project(&create_project("Survey", now()), &project_path).expect("save project");

    let error = add_table(&project_path, "  ", "Roads").expect_err("blank id");
    assert!(format!("{error:#}").contains("table id must not be blank"));
    let project = load_project(&project_path).expect("reload");
    assert_eq!(project.tables().count(), 0);
}

#[test]
fn tables_are_edited_and_removed_in_the_project_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project_path = dir.path().join("survey.pgs");
    parcel_project(&project_path);
    add_table(&project_path, "ROAD", "Roads").expect("add road");

    edit_table(&project_path, "parcel", Some("LOT"), None).expect("rename id");
    edit_table(&project_path, "LOT", None, Some("Lots")).expect("rename");
    let project = load_project(&project_path).expect("reload");
    let lot = project.table("LOT").expect("lot table");
    assert_eq!(lot.table_name, "Lots");
    assert_eq!(lot.columns.len(), 3);
    assert!(project.table("PARCEL").is_none());

    assert!(edit_table(&project_path, "LOT", Some("road"), None).is_err());
    assert!(edit_table(&project_path, "RIVER", Some("RIVERS"), None).is_err());

    let removed = remove_table(&project_path, "road").expect("remove");
    assert_eq!(removed, "ROAD");
    assert!(remove_table(&project_path, "ROAD").is_err());
    let project = load_project(&project_path).expect("reload");
    let ids: Vec<&str> = project.tables().map(|table| table.table_id.as_str()).collect();
    assert_eq!(ids, ["LOT"]);
}
