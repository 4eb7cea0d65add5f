//! Horizontal and vertical bar chart renderers
//!
//! Both take pre-sorted `(label, value)` pairs; ordering decisions
//! belong to the aggregation layer, not here.

use std::error::Error;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::charts::render::{self, format_count, BAR_COLOR};
use crate::pipeline::error::AnalysisError;

/// Render a horizontal bar chart with the first item at the top.
pub fn horizontal_bars(
    title: &str,
    x_desc: &str,
    items: &[(String, u64)],
    path: &Path,
) -> Result<()> {
    let staged = render::staging_path(path);
    draw_horizontal(title, x_desc, items, &staged)
        .map_err(|e| AnalysisError::render(path, e))?;
    render::promote(&staged, path)
}

/// Render a vertical bar chart with rotated category labels.
pub fn vertical_bars(
    title: &str,
    y_desc: &str,
    items: &[(String, u64)],
    path: &Path,
) -> Result<()> {
    let staged = render::staging_path(path);
    draw_vertical(title, y_desc, items, &staged)
        .map_err(|e| AnalysisError::render(path, e))?;
    render::promote(&staged, path)
}

fn draw_horizontal(
    title: &str,
    x_desc: &str,
    items: &[(String, u64)],
    staged: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(staged, (1000, 700)).into_drawing_area();
    if items.is_empty() {
        render::draw_placeholder(&root, title)?;
        return root.present().map_err(Into::into);
    }
    root.fill(&WHITE)?;

    let n = items.len();
    let max_x = items.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(210)
        .build_cartesian_2d(0f64..max_x, 0f64..n as f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc(x_desc)
        .x_label_formatter(&|v| format_count(*v))
        .label_style(("sans-serif", 15))
        .draw()?;

    // Row 0 is the largest value and draws at the top.
    chart.draw_series(items.iter().enumerate().map(|(i, (_, value))| {
        let bottom = (n - i - 1) as f64 + 0.12;
        let top = (n - i) as f64 - 0.12;
        Rectangle::new([(0.0, bottom), (*value as f64, top)], BAR_COLOR.filled())
    }))?;

    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, (name, _)) in items.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(0.0, (n - i) as f64 - 0.5));
        root.draw_text(name, &label_style, (px - 8, py))?;
    }

    root.present()?;
    Ok(())
}

fn draw_vertical(
    title: &str,
    y_desc: &str,
    items: &[(String, u64)],
    staged: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(staged, (1000, 700)).into_drawing_area();
    if items.is_empty() {
        render::draw_placeholder(&root, title)?;
        return root.present().map_err(Into::into);
    }
    root.fill(&WHITE)?;

    let n = items.len();
    let max_y = items.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(150)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..n as f64, 0f64..max_y)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(y_desc)
        .y_label_formatter(&|v| format_count(*v))
        .label_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(items.iter().enumerate().map(|(i, (_, value))| {
        Rectangle::new(
            [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, *value as f64)],
            BAR_COLOR.filled(),
        )
    }))?;

    // Category names rotated below the axis, matplotlib-style.
    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center))
        .transform(FontTransform::Rotate90);
    for (i, (name, _)) in items.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
        root.draw_text(name, &label_style, (px, py + 10))?;
    }

    root.present()?;
    Ok(())
}
