//! Error types for the analysis pipeline.
//!
//! Every failure is fatal: the pipeline is a linear batch job with no
//! row-level recovery, so the first error aborts the run with a
//! diagnostic naming the failing stage and the offending value or path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, transforming or rendering.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input file missing or unreadable.
    #[error("cannot read input file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An expected column is absent, before or after the rename step.
    #[error("missing expected column '{column}' (available: {available:?})")]
    Schema {
        column: String,
        available: Vec<String>,
    },

    /// A date value does not match the expected `DD-MM-YYYY` format.
    #[error("row {row}: date value '{value}' does not match DD-MM-YYYY")]
    DateParse { row: usize, value: String },

    /// A chart could not be written to its output path.
    #[error("failed to render chart to {path}: {reason}")]
    Render { path: PathBuf, reason: String },
}

impl AnalysisError {
    pub fn render(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Render {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
