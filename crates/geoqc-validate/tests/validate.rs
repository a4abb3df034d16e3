//! Integration tests for the validation engine.

use std::path::Path;

use chrono::{Local, TimeZone};
use geoqc_model::{
    AttributeSchema, ColumnDefinition, FieldInfo, NOT_FOUND, ProjectDefinition, RuntimeCategory,
    TableDefinition, ValidationStatus,
};
use geoqc_validate::{ValidationError, find_table_for_file, validate, validate_file};
use proptest::prelude::*;

fn table(columns: Vec<ColumnDefinition>) -> TableDefinition {
    TableDefinition::new("PARCEL", "Parcels").with_columns(columns)
}

fn schema(fields: Vec<(&str, FieldInfo)>) -> AttributeSchema {
    fields.into_iter().collect()
}

fn project_with(tables: Vec<TableDefinition>) -> ProjectDefinition {
    let created = Local
        .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let mut project = ProjectDefinition::new("Survey", created);
    for table in tables {
        project.add_table(table).expect("add table");
    }
    project
}

#[test]
fn varchar2_with_matching_width_is_normal() {
    let table = table(vec![ColumnDefinition::new("NAME", "Name", "VARCHAR2", "50")]);
    let results = validate(&table, &schema(vec![("NAME", FieldInfo::character(50))]))
        .expect("validate");

    let row = &results[0];
    assert_eq!(row.status, ValidationStatus::Normal);
    assert!(row.field_found);
    assert_eq!(row.found_field_name, "NAME");
    assert_eq!(row.cur_type, "Character");
    assert_eq!(row.cur_length, "50");
    assert_eq!(row.std_type, "VARCHAR2");
    assert_eq!(row.std_length, "50");
}

#[test]
fn declared_type_is_reported_in_canonical_form() {
    let table = table(vec![
        ColumnDefinition::new("NAME", "Name", "varchar2", "50"),
        ColumnDefinition::new("BUILT", "Built", " Date ", "8"),
    ]);
    let results = validate(
        &table,
        &schema(vec![
            ("NAME", FieldInfo::character(50)),
            ("BUILT", FieldInfo::new(RuntimeCategory::Date, 8, 0)),
        ]),
    )
    .expect("validate");

    assert_eq!(results[0].std_type, "VARCHAR2");
    assert_eq!(results[1].std_type, "Date");
    assert!(results.iter().all(|row| row.is_normal()));
}

#[test]
fn varchar2_with_other_width_is_length_error() {
    let table = table(vec![ColumnDefinition::new("NAME", "Name", "VARCHAR2", "50")]);
    let results = validate(&table, &schema(vec![("NAME", FieldInfo::character(30))]))
        .expect("validate");

    let row = &results[0];
    assert!(row.type_correct);
    assert!(!row.length_correct);
    assert_eq!(row.status, ValidationStatus::Error);
    assert_eq!(row.remarks(), Some("length mismatch"));
}

#[test]
fn missing_field_yields_not_found_row() {
    let table = table(vec![ColumnDefinition::new("NAME", "Name", "VARCHAR2", "50")]);
    let results = validate(&table, &schema(vec![("OTHER", FieldInfo::character(50))]))
        .expect("validate");

    let row = &results[0];
    assert!(!row.field_found);
    assert_eq!(row.found_field_name, NOT_FOUND);
    assert_eq!(row.cur_type, NOT_FOUND);
    assert_eq!(row.cur_length, NOT_FOUND);
    assert!(!row.type_correct);
    assert!(!row.length_correct);
    assert_eq!(row.status, ValidationStatus::Error);
}

#[test]
fn number_checks_precision_and_scale() {
    let table = table(vec![ColumnDefinition::new("AREA", "Area", "NUMBER", "9,2")]);

    let ok = validate(&table, &schema(vec![("AREA", FieldInfo::numeric(9, 2))]))
        .expect("validate");
    assert_eq!(ok[0].status, ValidationStatus::Normal);
    assert_eq!(ok[0].cur_length, "9,2");

    let scale_off = validate(&table, &schema(vec![("AREA", FieldInfo::numeric(9, 0))]))
        .expect("validate");
    assert!(scale_off[0].type_correct);
    assert!(!scale_off[0].length_correct);
    assert_eq!(scale_off[0].status, ValidationStatus::Error);
    assert_eq!(scale_off[0].cur_length, "9");
}

#[test]
fn lookup_uses_column_id_not_display_name() {
    let table = table(vec![ColumnDefinition::new("PNU", "NAME", "VARCHAR2", "19")]);
    let results = validate(&table, &schema(vec![("NAME", FieldInfo::character(19))]))
        .expect("validate");
    assert!(!results[0].field_found);

    let results = validate(&table, &schema(vec![("pnu", FieldInfo::character(19))]))
        .expect("validate");
    assert!(results[0].field_found);
    assert_eq!(results[0].found_field_name, "PNU");
}

#[test]
fn wrong_type_never_has_correct_length() {
    let table = table(vec![ColumnDefinition::new("CODE", "Code", "VARCHAR2", "4")]);
    let results = validate(&table, &schema(vec![("CODE", FieldInfo::numeric(4, 0))]))
        .expect("validate");
    assert!(!results[0].type_correct);
    assert!(!results[0].length_correct);
    assert_eq!(results[0].remarks(), Some("type mismatch"));
}

#[test]
fn other_declared_types_match_category_names() {
    let table = table(vec![
        ColumnDefinition::new("BUILT", "Built", "date", "8"),
        ColumnDefinition::new("ACTIVE", "Active", "LOGICAL", "1"),
        ColumnDefinition::new("NOTE", "Note", "TEXT", "100"),
    ]);
    let results = validate(
        &table,
        &schema(vec![
            ("BUILT", FieldInfo::new(RuntimeCategory::Date, 8, 0)),
            ("ACTIVE", FieldInfo::new(RuntimeCategory::Logical, 3, 0)),
            ("NOTE", FieldInfo::character(100)),
        ]),
    )
    .expect("validate");

    assert_eq!(results[0].status, ValidationStatus::Normal);
    // Length is not constrained for non-aliased types.
    assert_eq!(results[1].status, ValidationStatus::Normal);
    assert!(!results[2].type_correct);
    assert_eq!(results[2].status, ValidationStatus::Error);
}

#[test]
fn malformed_declared_length_is_compared_as_zero() {
    let table = table(vec![ColumnDefinition::new("NAME", "Name", "VARCHAR2", "fifty")]);
    let results = validate(&table, &schema(vec![("NAME", FieldInfo::character(50))]))
        .expect("validate");
    assert_eq!(results[0].std_length, "fifty");
    assert!(!results[0].length_correct);
}

#[test]
fn duplicate_column_ids_abort_the_run() {
    let table = table(vec![
        ColumnDefinition::new("NAME", "Name", "VARCHAR2", "50"),
        ColumnDefinition::new("name", "Name again", "VARCHAR2", "50"),
    ]);
    let error = validate(&table, &AttributeSchema::new()).expect_err("duplicate ids");
    assert!(matches!(
        error,
        ValidationError::DuplicateColumnId { ref column_id, .. } if column_id == "name"
    ));
}

#[test]
fn empty_table_produces_no_verdicts() {
    let results = validate(&table(Vec::new()), &AttributeSchema::new()).expect("validate");
    assert!(results.is_empty());
}

#[test]
fn file_binds_to_table_by_base_name() {
    let project = project_with(vec![
        TableDefinition::new("ROAD", "Roads"),
        TableDefinition::new("PARCEL", "Parcels"),
    ]);
    let table = find_table_for_file(&project, Path::new("/data/parcel.shp")).expect("match");
    assert_eq!(table.table_id, "PARCEL");

    let error = find_table_for_file(&project, Path::new("/data/parcels.shp")).expect_err("no match");
    assert!(matches!(
        error,
        ValidationError::NoMatchingTable { ref file_id } if file_id == "parcels"
    ));
}

#[test]
fn validate_file_reports_counts() {
    let project = project_with(vec![table(vec![
        ColumnDefinition::new("NAME", "Name", "VARCHAR2", "50"),
        ColumnDefinition::new("AREA", "Area", "NUMBER", "9,2"),
    ])]);
    let outcome = validate_file(
        &project,
        Path::new("PARCEL.dbf"),
        &schema(vec![("NAME", FieldInfo::character(50))]),
    )
    .expect("validate file");
    assert_eq!(outcome.table.table_id, "PARCEL");
    assert_eq!(outcome.normal_count(), 1);
    assert_eq!(outcome.error_count(), 1);
    assert!(outcome.has_errors());
}

fn arb_category() -> impl Strategy<Value = RuntimeCategory> {
    prop_oneof![
        Just(RuntimeCategory::Character),
        Just(RuntimeCategory::Numeric),
        Just(RuntimeCategory::Date),
        Just(RuntimeCategory::Logical),
        Just(RuntimeCategory::Unknown),
    ]
}

fn arb_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("VARCHAR2"),
        Just("number"),
        Just("Date"),
        Just("LOGICAL"),
        Just("TEXT"),
    ]
}

proptest! {
    #[test]
    fn verdicts_follow_table_order(
        columns in prop::collection::vec((arb_type(), 0u32..20, 0u32..4, any::<bool>()), 0..12),
        categories in prop::collection::vec(arb_category(), 12),
    ) {
        let definitions: Vec<ColumnDefinition> = columns
            .iter()
            .enumerate()
            .map(|(idx, (data_type, precision, scale, _))| {
                ColumnDefinition::new(
                    format!("COL{idx}"),
                    format!("Column {idx}"),
                    *data_type,
                    format!("{precision},{scale}"),
                )
            })
            .collect();
        // Only columns flagged `present` get a field, in reverse order.
        let fields: AttributeSchema = columns
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, (_, _, _, present))| *present)
            .map(|(idx, (_, precision, scale, _))| {
                (format!("col{idx}"), FieldInfo::new(categories[idx], *precision, *scale))
            })
            .collect();

        let table = TableDefinition::new("T", "T").with_columns(definitions);
        let results = validate(&table, &fields).expect("validate");

        prop_assert_eq!(results.len(), table.columns.len());
        for ((result, column), (_, _, _, present)) in
            results.iter().zip(&table.columns).zip(&columns)
        {
            prop_assert_eq!(&result.std_column_id, &column.column_id);
            prop_assert_eq!(result.field_found, *present);
            if !result.type_correct {
                prop_assert!(!result.length_correct);
            }
            if !present {
                prop_assert_eq!(result.status, ValidationStatus::Error);
            }
            prop_assert_eq!(
                result.status == ValidationStatus::Normal,
                result.type_correct && result.length_correct
            );
        }
    }
}
