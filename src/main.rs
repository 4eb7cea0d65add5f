//! Biotrend: Aadhaar Biometric-Update Analysis CLI
//!
//! A command-line tool that loads a biometric-update CSV export,
//! derives totals and age-band percentages, prints grouped summaries
//! and renders six static charts.

mod charts;
mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use charts::{render_all, ChartData};
use cli::Cli;
use pipeline::{
    age_totals, derive_records, extract_records, load_dataset, summarize_districts,
    summarize_states, summarize_trend,
};
use report::{
    print_age_totals, print_dataset_overview, print_district_table, print_state_table,
    print_trend_preview, RunSummary,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(&cli.input, &cli.output_dir);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    print_dataset_overview(rows, cols, &columns);

    let mut summary = RunSummary::new(rows);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Transform and clean
    print_step_header(2, "Transform & Clean");

    let step_start = Instant::now();
    let raw = extract_records(&df)?;
    let records = derive_records(raw);
    summary.rows_retained = records.len();
    print_success("Derived totals and age-band percentages");
    print_count("row(s) retained", records.len(), Some("(total > 0)"));
    let transform_elapsed = step_start.elapsed();
    summary.set_transform_time(transform_elapsed);
    print_step_time(transform_elapsed);

    // Step 3: Aggregate
    print_step_header(3, "Aggregate");

    let step_start = Instant::now();
    let states = summarize_states(&records);
    let districts = summarize_districts(&records);
    let trend = summarize_trend(&records);
    let ages = age_totals(&records);
    summary.state_count = states.len();
    summary.district_count = districts.len();

    println!();
    print_info("Top 10 States by Biometric Updates:");
    print_state_table(&states, 10);

    println!();
    print_info("Top 10 District Hotspots:");
    print_district_table(&districts, 10);

    println!();
    print_info("Age-wise Totals:");
    print_age_totals(ages);

    println!();
    print_info("Time Trend Preview:");
    print_trend_preview(&trend, 5);

    let aggregate_elapsed = step_start.elapsed();
    summary.set_aggregate_time(aggregate_elapsed);
    print_step_time(aggregate_elapsed);

    // Step 4: Render charts
    print_step_header(4, "Render Charts");

    let step_start = Instant::now();
    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "failed to create chart output directory: {}",
            cli.output_dir.display()
        )
    })?;

    let spinner = create_spinner("Rendering charts...");
    let data = ChartData {
        states: &states,
        districts: &districts,
        trend: &trend,
        ages,
    };
    let written = render_all(&data, &cli.output_dir)?;
    finish_with_success(
        &spinner,
        &format!(
            "{} charts written to {}",
            written.len(),
            cli.output_dir.display()
        ),
    );
    summary.charts_written = written.len();
    let render_elapsed = step_start.elapsed();
    summary.set_render_time(render_elapsed);
    print_step_time(render_elapsed);

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}
