//! Stdout summary tables for the grouped aggregates

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use console::style;

use crate::pipeline::aggregate::{AgeTotals, DistrictSummary, StateSummary, TrendPoint};

/// Print dataset shape and column list after load.
pub fn print_dataset_overview(rows: usize, cols: usize, columns: &[String]) {
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {rows}");
    println!("      Columns: {cols}");
    println!("      Column list: {}", columns.join(", "));
}

/// Print the top-`limit` states with per-band and total sums.
pub fn print_state_table(states: &[StateSummary], limit: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("State").add_attribute(Attribute::Bold),
        Cell::new("Age 5-17").add_attribute(Attribute::Bold),
        Cell::new("Age 17+").add_attribute(Attribute::Bold),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);

    for s in states.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&s.state),
            count_cell(s.age_5_to_17_updates),
            count_cell(s.age_17_plus_updates),
            count_cell(s.total_biometric_updates),
        ]);
    }

    print_indented(&table);
}

/// Print the top-`limit` district hotspots.
pub fn print_district_table(districts: &[DistrictSummary], limit: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("District").add_attribute(Attribute::Bold),
        Cell::new("State").add_attribute(Attribute::Bold),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);

    for d in districts.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&d.district),
            Cell::new(&d.state),
            count_cell(d.total_biometric_updates),
        ]);
    }

    print_indented(&table);
}

/// Print the grand totals of both age bands.
pub fn print_age_totals(ages: AgeTotals) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Age band").add_attribute(Attribute::Bold),
        Cell::new("Updates").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Age 5-17"), count_cell(ages.age_5_to_17)]);
    table.add_row(vec![Cell::new("Age 17+"), count_cell(ages.age_17_plus)]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        count_cell(ages.total()).add_attribute(Attribute::Bold),
    ]);

    print_indented(&table);
}

/// Print the first `limit` dates of the time trend.
pub fn print_trend_preview(trend: &[TrendPoint], limit: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);

    for p in trend.iter().take(limit) {
        table.add_row(vec![
            Cell::new(p.date.format("%d-%m-%Y")),
            count_cell(p.total_biometric_updates),
        ]);
    }

    print_indented(&table);
}

/// Format a count with thousands separators.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn count_cell(value: u64) -> Cell {
    Cell::new(group_digits(value)).set_alignment(CellAlignment::Right)
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {line}");
    }
}
