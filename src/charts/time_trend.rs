//! Daily time-trend line chart

use std::error::Error;
use std::path::Path;

use anyhow::Result;
use chrono::Duration;
use plotters::prelude::*;

use crate::charts::render::{self, format_count, TREND_COLOR};
use crate::pipeline::aggregate::TrendPoint;
use crate::pipeline::error::AnalysisError;

const TITLE: &str = "Time Trend of Aadhaar Biometric Updates";

/// Render total updates per date as a chronological line chart.
pub fn time_trend(points: &[TrendPoint], path: &Path) -> Result<()> {
    let staged = render::staging_path(path);
    draw(points, &staged).map_err(|e| AnalysisError::render(path, e))?;
    render::promote(&staged, path)
}

fn draw(points: &[TrendPoint], staged: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(staged, (1000, 600)).into_drawing_area();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        render::draw_placeholder(&root, TITLE)?;
        return root.present().map_err(Into::into);
    };
    root.fill(&WHITE)?;

    // A single observed date still needs a non-degenerate x range.
    let from = first.date;
    let to = if last.date > first.date {
        last.date
    } else {
        first.date + Duration::days(1)
    };
    let max_y = points
        .iter()
        .map(|p| p.total_biometric_updates)
        .max()
        .unwrap_or(0)
        .max(1) as f64
        * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(from..to, 0f64..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Total Updates")
        .x_label_formatter(&|d| d.format("%d-%m-%Y").to_string())
        .y_label_formatter(&|v| format_count(*v))
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points
            .iter()
            .map(|p| (p.date, p.total_biometric_updates as f64)),
        ShapeStyle::from(&TREND_COLOR).stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
