//! Run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::report::tables::group_digits;

/// Summary of one analysis run, displayed after the charts are written.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_retained: usize,
    pub state_count: usize,
    pub district_count: usize,
    pub charts_written: usize,
    load_time: Duration,
    transform_time: Duration,
    aggregate_time: Duration,
    render_time: Duration,
}

impl RunSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_transform_time(&mut self, elapsed: Duration) {
        self.transform_time = elapsed;
    }

    pub fn set_aggregate_time(&mut self, elapsed: Duration) {
        self.aggregate_time = elapsed;
    }

    pub fn set_render_time(&mut self, elapsed: Duration) {
        self.render_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.transform_time + self.aggregate_time + self.render_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows loaded"),
            Cell::new(group_digits(self.rows_loaded as u64)),
        ]);

        let dropped = self.rows_loaded.saturating_sub(self.rows_retained);
        table.add_row(vec![
            Cell::new("🗑️  Dropped (zero updates)"),
            Cell::new(group_digits(dropped as u64)).fg(if dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Rows retained"),
            Cell::new(group_digits(self.rows_retained as u64))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🗺️  States"),
            Cell::new(self.state_count),
        ]);

        table.add_row(vec![
            Cell::new("📍 Districts"),
            Cell::new(self.district_count),
        ]);

        table.add_row(vec![
            Cell::new("📊 Charts written"),
            Cell::new(self.charts_written).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
