//! Shared rendering helpers: atomic PNG writes, axis formatting and
//! the color scale used by the heatmap.

use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::pipeline::error::AnalysisError;

/// Bar fill used by every bar chart.
pub const BAR_COLOR: RGBColor = RGBColor(66, 133, 190);
/// Line color of the time-trend chart.
pub const TREND_COLOR: RGBColor = RGBColor(31, 119, 180);
/// Slice colors of the age-distribution pie.
pub const PIE_COLORS: [RGBColor; 2] = [RGBColor(255, 160, 60), RGBColor(84, 130, 189)];

/// Staging path for an atomic chart write in the same directory.
///
/// Keeps the `.png` extension so the bitmap backend still recognizes
/// the format; the finished image is renamed into place afterwards.
pub fn staging_path(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chart");
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!(".{stem}.tmp.png"))
}

/// Move a finished staging image onto its final path.
pub fn promote(staged: &Path, target: &Path) -> Result<()> {
    std::fs::rename(staged, target)
        .map_err(|e| AnalysisError::render(target, e))?;
    Ok(())
}

/// Compact axis labels for large counts (`1.2M`, `45k`).
pub fn format_count(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Map a normalized intensity in `[0, 1]` onto a yellow-to-red scale.
pub fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8, t: f64| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    if t < 0.5 {
        // light yellow -> orange
        let t = t * 2.0;
        RGBColor(lerp(255, 253, t), lerp(255, 141, t), lerp(204, 60, t))
    } else {
        // orange -> dark red
        let t = (t - 0.5) * 2.0;
        RGBColor(lerp(253, 189, t), lerp(141, 0, t), lerp(60, 38, t))
    }
}

/// Draw a titled blank chart for an empty aggregate.
pub fn draw_placeholder(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&WHITE)?;
    let (w, h) = root.dim_in_pixel();

    let title_style = TextStyle::from(("sans-serif", 28).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(title, &title_style, (w as i32 / 2, 40))?;

    let note_style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&RGBColor(130, 130, 130))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text("no data to display", &note_style, (w as i32 / 2, h as i32 / 2))?;
    Ok(())
}
