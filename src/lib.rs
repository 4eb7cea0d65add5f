//! Biotrend: Aadhaar Biometric-Update Analysis Library
//!
//! A library for loading Aadhaar biometric-update records, deriving
//! totals and age-band percentages, aggregating by state, district and
//! date, and rendering summary charts.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
