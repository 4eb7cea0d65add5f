//! Charts module - the six static PNG artifacts

pub mod age_pie;
pub mod bars;
pub mod heatmap;
pub mod render;
pub mod time_trend;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::pipeline::aggregate::{AgeTotals, DistrictSummary, StateSummary, TrendPoint};

/// Fixed output file names, in chart order.
pub const CHART_FILES: [&str; 6] = [
    "chart_1_state_updates.png",
    "chart_2_top_districts.png",
    "chart_3_age_distribution.png",
    "chart_4_time_trend.png",
    "chart_5_top_vs_bottom.png",
    "chart_6_state_heatmap.png",
];

/// Aggregates the chart layer consumes; each chart reads exactly one.
#[derive(Debug, Clone, Copy)]
pub struct ChartData<'a> {
    pub states: &'a [StateSummary],
    pub districts: &'a [DistrictSummary],
    pub trend: &'a [TrendPoint],
    pub ages: AgeTotals,
}

/// Render all six charts into `out_dir`, returning the written paths.
///
/// The first failing chart aborts the run; finished charts are already
/// renamed into place, the failed one leaves no partial file behind.
pub fn render_all(data: &ChartData<'_>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = CHART_FILES.iter().map(|f| out_dir.join(f)).collect();

    let top_states: Vec<(String, u64)> = data
        .states
        .iter()
        .take(15)
        .map(|s| (s.state.clone(), s.total_biometric_updates))
        .collect();
    bars::horizontal_bars(
        "State-wise Aadhaar Biometric Updates (Top 15)",
        "Total Biometric Updates",
        &top_states,
        &paths[0],
    )?;

    let top_districts: Vec<(String, u64)> = data
        .districts
        .iter()
        .take(10)
        .map(|d| (d.label(), d.total_biometric_updates))
        .collect();
    bars::horizontal_bars(
        "Top 10 District Hotspots",
        "Total Biometric Updates",
        &top_districts,
        &paths[1],
    )?;

    age_pie::age_distribution(data.ages, &paths[2])?;

    time_trend::time_trend(data.trend, &paths[3])?;

    let comparison: Vec<(String, u64)> = top_vs_bottom(data.states, 5)
        .map(|s| (s.state.clone(), s.total_biometric_updates))
        .collect();
    bars::vertical_bars(
        "Top vs Bottom States - Biometric Update Inequality",
        "Total Updates",
        &comparison,
        &paths[4],
    )?;

    heatmap::state_heatmap(data.states, &paths[5])?;

    Ok(paths)
}

/// The `k` highest-total states followed by the `k` lowest-total ones,
/// each group keeping the summary's descending order.
fn top_vs_bottom(states: &[StateSummary], k: usize) -> impl Iterator<Item = &StateSummary> {
    let n = states.len();
    // Groups never overlap: with fewer than 2k states the bottom group
    // only takes what the top group left.
    let tail_start = if n <= k { n } else { (n - k).max(k) };
    states.iter().take(k).chain(states[tail_start..].iter())
}
