use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bloodbank_cli::types::{DayClassSummary, GenerateResult};
use bloodbank_model::{BLOOD_TYPE_DISTRIBUTION, DayClass};

pub fn print_summary(result: &GenerateResult) {
    println!("Output: {}", result.output_dir.display());
    println!(
        "Range: {} to {} ({} days), seed {}",
        result.config.start_date,
        result.config.end_date,
        result.config.day_count(),
        result.seed
    );
    print_reference(result);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Path"),
        header_cell("Records"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in result.outputs.files() {
        let name = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            dim_cell(file.path.display()),
            Cell::new(file.records),
        ]);
    }
    println!("{table}");

    print_day_classes(&result.day_classes);
    print_donation_sample(result);
}

fn print_reference(result: &GenerateResult) {
    let reference = &result.reference;
    let rate = reference
        .march_2007_rate
        .map(|rate| format!("{:.1}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Reference: {} transfusion rows (March 2007 donors {}), {} pincodes, {} holidays",
        reference.transfusion_rows, rate, reference.pincodes, reference.holidays
    );
}

fn print_day_classes(summaries: &[DayClassSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day class"),
        header_cell("Days"),
        header_cell("Donations"),
        header_cell("Issuances"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            day_class_cell(summary.class),
            count_cell(summary.days),
            count_cell(summary.donations),
            count_cell(summary.issuances),
        ]);
    }
    println!();
    println!("{table}");
}

fn print_donation_sample(result: &GenerateResult) {
    if result.donation_sample.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Donor_ID"),
        header_cell("Blood_Type"),
        header_cell("Units_Collected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for event in &result.donation_sample {
        table.add_row(vec![
            Cell::new(event.date),
            Cell::new(&event.donor_id),
            Cell::new(event.blood_type),
            Cell::new(event.units_collected),
        ]);
    }
    println!();
    println!("Sample of donations_log.csv:");
    println!("{table}");
}

pub fn print_blood_types() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Blood type"),
        header_cell("Rh"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for (blood_type, weight) in BLOOD_TYPE_DISTRIBUTION {
        let rh = if blood_type.is_rh_positive() { "+" } else { "-" };
        table.add_row(vec![
            Cell::new(blood_type).add_attribute(Attribute::Bold),
            Cell::new(rh),
            Cell::new(format!("{:.0}%", weight * 100.0)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
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

fn day_class_cell(class: DayClass) -> Cell {
    match class {
        DayClass::Holiday => Cell::new(class).fg(Color::Yellow),
        DayClass::Weekend => Cell::new(class).fg(Color::Green),
        DayClass::Weekday => Cell::new(class),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
