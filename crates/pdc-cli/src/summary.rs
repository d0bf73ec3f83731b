use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pdc_cli::types::CleanResult;
use pdc_model::{NO_ISSUES_LABEL, PipelineReport};

pub fn print_summary(result: &CleanResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    println!("Schema: {}  Country: {}", report.schema, report.country);
    match &result.outputs {
        Some(paths) => {
            println!("Output: {}", paths.full.display());
            println!("Upload file: {}", paths.clean.display());
        }
        None => println!("Output: dry run, no files written"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Records: {} ({} without issues)",
        result.records,
        result.clean_records()
    );

    print_field_table(report);
    print_required_table(report);
    print_phone_table(report);
    print_issue_table(report);
}

fn print_field_table(report: &PipelineReport) {
    if report.reconciliation.is_exact() {
        return;
    }
    let unexpected = &report.reconciliation.unexpected_present;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Status"),
        header_cell("Required"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for missing in &report.missing_fields {
        let required = if missing.required {
            Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&missing.field),
            Cell::new("missing").fg(Color::Yellow),
            required,
        ]);
    }
    for column in unexpected {
        table.add_row(vec![
            dim_cell(column),
            dim_cell("dropped"),
            dim_cell("-"),
        ]);
    }
    println!();
    println!("Missing or incorrectly named columns:");
    println!("{table}");
}

fn print_required_table(report: &PipelineReport) {
    if report.required_nulls.is_empty() && report.contact_nulls.is_none() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Missing records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &report.required_nulls {
        table.add_row(vec![Cell::new(&entry.field), count_cell(entry.null_count, Color::Red)]);
    }
    if let Some(count) = report.contact_nulls {
        table.add_row(vec![
            Cell::new("all contact details").add_attribute(Attribute::Italic),
            count_cell(count, Color::Red),
        ]);
    }
    println!();
    println!("Required fields:");
    println!("{table}");
}

fn print_phone_table(report: &PipelineReport) {
    if report.phone_summaries.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Clean"),
        header_cell("Ambiguous"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in &report.phone_summaries {
        table.add_row(vec![
            Cell::new(&summary.field),
            count_cell(summary.clean, Color::Green),
            count_cell(summary.ambiguous, Color::Yellow),
            count_cell(summary.missing, Color::Red),
        ]);
    }
    println!();
    println!("Phone numbers:");
    println!("{table}");
}

fn print_issue_table(report: &PipelineReport) {
    let frequency = &report.issue_frequency;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &frequency.counts {
        table.add_row(vec![Cell::new(&entry.issue), count_cell(entry.count, Color::Yellow)]);
    }
    table.add_row(vec![
        Cell::new(NO_ISSUES_LABEL)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(frequency.clean_records).fg(Color::Green),
    ]);
    println!();
    println!("Frequency of issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
