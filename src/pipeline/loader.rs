//! Dataset loader for the raw Aadhaar biometric-update CSV export

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::pipeline::error::AnalysisError;

/// Columns the raw export must carry, named as they appear on disk.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "date",
    "state",
    "district",
    "bio_age_5_17",
    "bio_age_17_",
];

/// Renames applied to the raw age-band columns on load.
pub const COLUMN_RENAMES: [(&str, &str); 2] = [
    ("bio_age_5_17", "age_5_to_17_updates"),
    ("bio_age_17_", "age_17_plus_updates"),
];

/// Load the raw CSV export and apply the age-band column renames.
///
/// Single-shot read, no retries: an unreadable path fails immediately
/// and a missing column fails before any row is extracted.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    // Report an unreadable path with the path itself, not whatever the
    // CSV reader happens to say about it.
    std::fs::metadata(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut df = LazyCsvReader::new(path)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("failed to load CSV file: {}", path.display()))?;

    let available: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !available.iter().any(|c| c == column) {
            return Err(AnalysisError::Schema {
                column: column.to_string(),
                available: available.clone(),
            }
            .into());
        }
    }

    for (old, new) in COLUMN_RENAMES {
        df.rename(old, new.into())
            .with_context(|| format!("failed to rename column '{}'", old))?;
    }

    Ok(df)
}
