//! Typed record extraction and derived-column computation
//!
//! Converts the loaded DataFrame into plain records, parsing dates
//! strictly from `DD-MM-YYYY`. Derivation runs filter-then-compute:
//! rows with no updates in either age band are dropped before the
//! percentage columns are computed, so no division by zero can occur.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::*;

use crate::pipeline::error::AnalysisError;

/// Expected format of the raw `date` column.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One raw row of the renamed dataset, before derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawUpdate {
    pub state: String,
    pub district: String,
    pub date: NaiveDate,
    pub age_5_to_17_updates: u64,
    pub age_17_plus_updates: u64,
}

/// A retained record with derived total and age-band percentages.
///
/// Invariant: `total_biometric_updates > 0` and equals the exact sum of
/// the two age-band counts.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRecord {
    pub state: String,
    pub district: String,
    pub date: NaiveDate,
    pub age_5_to_17_updates: u64,
    pub age_17_plus_updates: u64,
    pub total_biometric_updates: u64,
    pub pct_age_5_to_17: f64,
    pub pct_age_17_plus: f64,
}

/// Extract typed records from the renamed DataFrame.
///
/// Fails on the first date value not matching [`DATE_FORMAT`]; there is
/// no row-level recovery. Null counts read as zero and null identifiers
/// as empty strings, mirroring the raw export's lack of validation.
pub fn extract_records(df: &DataFrame) -> Result<Vec<RawUpdate>> {
    let states = string_column(df, "state")?;
    let districts = string_column(df, "district")?;
    let dates = string_column(df, "date")?;
    let age_young = count_column(df, "age_5_to_17_updates")?;
    let age_adult = count_column(df, "age_17_plus_updates")?;

    let states = states.str()?;
    let districts = districts.str()?;
    let dates = dates.str()?;
    let age_young = age_young.i64()?;
    let age_adult = age_adult.i64()?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let raw_date = dates.get(row).unwrap_or_default();
        let date =
            NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
                AnalysisError::DateParse {
                    row,
                    value: raw_date.to_string(),
                }
            })?;

        records.push(RawUpdate {
            state: states.get(row).unwrap_or_default().to_string(),
            district: districts.get(row).unwrap_or_default().to_string(),
            date,
            age_5_to_17_updates: age_young.get(row).unwrap_or(0).max(0) as u64,
            age_17_plus_updates: age_adult.get(row).unwrap_or(0).max(0) as u64,
        });
    }

    Ok(records)
}

/// Derive totals and percentages, retaining only rows with updates.
///
/// Filter-then-compute: a row whose age-band counts are both zero is
/// dropped before any percentage is computed.
pub fn derive_records(raw: Vec<RawUpdate>) -> Vec<UpdateRecord> {
    raw.into_iter()
        .filter_map(|r| {
            let total = r.age_5_to_17_updates + r.age_17_plus_updates;
            if total == 0 {
                return None;
            }
            Some(UpdateRecord {
                pct_age_5_to_17: r.age_5_to_17_updates as f64 / total as f64 * 100.0,
                pct_age_17_plus: r.age_17_plus_updates as f64 / total as f64 * 100.0,
                total_biometric_updates: total,
                state: r.state,
                district: r.district,
                date: r.date,
                age_5_to_17_updates: r.age_5_to_17_updates,
                age_17_plus_updates: r.age_17_plus_updates,
            })
        })
        .collect()
}

/// Fetch a column as strings, reporting a schema error if absent.
fn string_column(df: &DataFrame, name: &str) -> Result<Series> {
    Ok(required_column(df, name)?.cast(&DataType::String)?)
}

/// Fetch a count column as signed 64-bit integers.
fn count_column(df: &DataFrame, name: &str) -> Result<Series> {
    Ok(required_column(df, name)?.cast(&DataType::Int64)?)
}

fn required_column(df: &DataFrame, name: &str) -> Result<Series> {
    match df.column(name) {
        Ok(column) => Ok(column.as_materialized_series().clone()),
        Err(_) => Err(AnalysisError::Schema {
            column: name.to_string(),
            available: df
                .get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
        .into()),
    }
}
