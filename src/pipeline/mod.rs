//! Pipeline module - the five analysis stages in order

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod transform;

pub use aggregate::*;
pub use error::AnalysisError;
pub use loader::*;
pub use transform::*;
