//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use biotrend::pipeline::{derive_records, RawUpdate, UpdateRecord};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Header row of the raw export, as it appears on disk.
pub const RAW_HEADER: &str = "date,state,district,bio_age_5_17,bio_age_17_";

/// Write a raw-export CSV with the standard header and the given rows.
pub fn create_temp_csv(rows: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("aadhaar_test.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "{}", RAW_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    drop(file);

    (temp_dir, csv_path)
}

pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build one raw record with fixed date `01-01-2024`.
pub fn raw(state: &str, district: &str, young: u64, adult: u64) -> RawUpdate {
    raw_on(state, district, date(1, 1, 2024), young, adult)
}

pub fn raw_on(
    state: &str,
    district: &str,
    date: NaiveDate,
    young: u64,
    adult: u64,
) -> RawUpdate {
    RawUpdate {
        state: state.to_string(),
        district: district.to_string(),
        date,
        age_5_to_17_updates: young,
        age_17_plus_updates: adult,
    }
}

/// Derive retained records from raw fixtures.
pub fn records(raw: Vec<RawUpdate>) -> Vec<UpdateRecord> {
    derive_records(raw)
}

/// A small mixed dataset: three states, four districts, two dates.
pub fn sample_records() -> Vec<UpdateRecord> {
    records(vec![
        raw_on("Delhi", "Central", date(1, 1, 2024), 30, 20),
        raw_on("Delhi", "North", date(1, 1, 2024), 10, 10),
        raw_on("Kerala", "Kochi", date(2, 1, 2024), 5, 15),
        raw_on("Goa", "Panaji", date(2, 1, 2024), 1, 2),
        raw_on("Delhi", "Central", date(2, 1, 2024), 20, 10),
    ])
}
