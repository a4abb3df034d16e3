use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use geoqc_cli::workflow::ValidationRun;
use geoqc_dbf::DbfHeader;
use geoqc_model::{ColumnValidationResult, ProjectDefinition, ValidationStatus};

pub fn print_validation(run: &ValidationRun, report_path: Option<&Path>) {
    let report = &run.report;
    println!("File: {}", report.source_file_name());
    println!("Project: {}", report.project_name());
    println!("Table: {} ({})", run.table_id, run.table_name);
    if let Some(path) = report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Column ID"),
        header_cell("Column Name"),
        header_cell("Std Type"),
        header_cell("Std Length"),
        header_cell("File Type"),
        header_cell("File Length"),
        header_cell("Remarks"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for result in report.results() {
        table.add_row(result_row(result));
    }
    println!("{table}");

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Total"),
        header_cell("Normal"),
        header_cell("Error"),
        header_cell("Success Rate"),
    ]);
    apply_table_style(&mut totals);
    for index in 0..4 {
        align_column(&mut totals, index, CellAlignment::Right);
    }
    totals.add_row(vec![
        Cell::new(report.total_count()).add_attribute(Attribute::Bold),
        count_cell(report.normal_count(), Color::Green),
        count_cell(report.error_count(), Color::Red),
        Cell::new(report.success_rate_display()),
    ]);
    println!("{totals}");
}

pub fn print_fields(path: &Path, header: &DbfHeader) {
    println!("File: {}", path.display());
    println!("Records: {}", header.record_count);
    if let Some(date) = header.last_update {
        println!("Last update: {date}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Native"),
        header_cell("Category"),
        header_cell("Length"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, field) in header.fields.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&field.name).add_attribute(Attribute::Bold),
            Cell::new(field.type_code),
            Cell::new(field.category()),
            Cell::new(field.info().field_length()),
        ]);
    }
    println!("{table}");
}

pub fn print_tables(project: &ProjectDefinition) {
    println!("Project: {}", project.project_name);
    println!("Created: {}", project.created_at.format("%Y-%m-%d %H:%M:%S"));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Table ID"),
        header_cell("Table Name"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for category in &project.categories {
        if category.tables.is_empty() {
            table.add_row(vec![
                Cell::new(&category.category_name),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell(0),
            ]);
            continue;
        }
        for entry in &category.tables {
            table.add_row(vec![
                Cell::new(&category.category_name),
                Cell::new(&entry.table_id)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&entry.table_name),
                Cell::new(entry.columns.len()),
            ]);
        }
    }
    println!("{table}");
}

fn result_row(result: &ColumnValidationResult) -> Vec<Cell> {
    vec![
        status_cell(result.status),
        Cell::new(&result.std_column_id).add_attribute(Attribute::Bold),
        Cell::new(&result.std_column_name),
        Cell::new(&result.std_type),
        Cell::new(&result.std_length),
        check_cell(&result.cur_type, result.field_found && result.type_correct),
        check_cell(&result.cur_length, result.field_found && result.length_correct),
        match result.remarks() {
            Some(remarks) => Cell::new(remarks).fg(Color::Red),
            None => dim_cell("-"),
        },
    ]
}

fn status_cell(status: ValidationStatus) -> Cell {
    match status {
        ValidationStatus::Normal => Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ValidationStatus::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn check_cell(value: &str, correct: bool) -> Cell {
    if correct {
        Cell::new(value)
    } else {
        Cell::new(value).fg(Color::Red)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
