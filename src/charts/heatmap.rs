//! Single-column state heatmap
//!
//! One row per state in region-summary order (highest total at the
//! top), colored on one shared yellow-to-red scale, with a gradient
//! legend on the right.

use std::error::Error;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::render::{self, format_count, heat_color};
use crate::pipeline::aggregate::StateSummary;
use crate::pipeline::error::AnalysisError;

const TITLE: &str = "State-wise Heatmap of Aadhaar Biometric Updates";

/// Render the per-state intensity matrix.
pub fn state_heatmap(states: &[StateSummary], path: &Path) -> Result<()> {
    let staged = render::staging_path(path);
    draw(states, &staged).map_err(|e| AnalysisError::render(path, e))?;
    render::promote(&staged, path)
}

fn draw(states: &[StateSummary], staged: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(staged, (800, 1200)).into_drawing_area();
    if states.is_empty() {
        render::draw_placeholder(&root, TITLE)?;
        return root.present().map_err(Into::into);
    }
    root.fill(&WHITE)?;

    let (matrix_area, legend_area) = root.split_horizontally(640);

    let n = states.len();
    let max_total = states
        .iter()
        .map(|s| s.total_biometric_updates)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(&matrix_area)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(200)
        .build_cartesian_2d(0f64..1f64, 0f64..n as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()?;

    chart.draw_series(states.iter().enumerate().map(|(i, s)| {
        let intensity = s.total_biometric_updates as f64 / max_total as f64;
        let bottom = (n - i - 1) as f64;
        let top = (n - i) as f64;
        Rectangle::new([(0.0, bottom), (1.0, top)], heat_color(intensity).filled())
    }))?;

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, s) in states.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(0.0, (n - i) as f64 - 0.5));
        matrix_area.draw_text(&s.state, &label_style, (px - 8, py))?;
    }

    let axis_style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    let (px, py) = chart.backend_coord(&(0.5, 0.0));
    matrix_area.draw_text("Total Updates", &axis_style, (px, py + 10))?;

    draw_legend(&legend_area, max_total)?;

    root.present()?;
    Ok(())
}

/// Vertical gradient strip with min/max annotations, shared scale.
fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    max_total: u64,
) -> Result<(), Box<dyn Error>> {
    const STEPS: usize = 64;
    let (_, h) = area.dim_in_pixel();
    let x0 = 30;
    let x1 = x0 + 30;
    let top = 120;
    let bottom = h as i32 - 120;
    let span = (bottom - top).max(1);

    for step in 0..STEPS {
        let t_hi = 1.0 - step as f64 / STEPS as f64;
        let y0 = top + (span as f64 * step as f64 / STEPS as f64) as i32;
        let y1 = top + (span as f64 * (step + 1) as f64 / STEPS as f64) as i32;
        area.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            heat_color(t_hi).filled(),
        ))?;
    }

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    area.draw_text(&format_count(max_total as f64), &label_style, (x1 + 8, top))?;
    area.draw_text("0", &label_style, (x1 + 8, bottom))?;

    let desc_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    area.draw_text("Total Biometric Updates", &desc_style, (x0, top - 30))?;

    Ok(())
}
