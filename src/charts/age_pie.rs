//! Age-band distribution pie chart

use std::error::Error;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::charts::render::{self, PIE_COLORS};
use crate::pipeline::aggregate::AgeTotals;
use crate::pipeline::error::AnalysisError;

const TITLE: &str = "Age-wise Distribution of Biometric Updates";

/// Render the two-slice age-band pie with one-decimal percentage labels.
pub fn age_distribution(ages: AgeTotals, path: &Path) -> Result<()> {
    let staged = render::staging_path(path);
    draw(ages, &staged).map_err(|e| AnalysisError::render(path, e))?;
    render::promote(&staged, path)
}

fn draw(ages: AgeTotals, staged: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(staged, (700, 700)).into_drawing_area();
    if ages.total() == 0 {
        render::draw_placeholder(&root, TITLE)?;
        return root.present().map_err(Into::into);
    }
    root.fill(&WHITE)?;

    let root = root.titled(TITLE, ("sans-serif", 28))?;

    let sizes = [ages.age_5_to_17 as f64, ages.age_17_plus as f64];
    let labels = ["Age 5-17", "Age 17+"];
    let center = (350, 330);
    let radius = 240.0;

    let mut pie = Pie::new(&center, &radius, &sizes, &PIE_COLORS, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 22).into_font());
    pie.percentages(("sans-serif", 20).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
