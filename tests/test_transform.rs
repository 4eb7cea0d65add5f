//! Unit tests for record extraction and derived columns

use biotrend::pipeline::{derive_records, extract_records, load_dataset};

#[path = "common/mod.rs"]
mod common;

use common::{create_temp_csv, date, raw};

#[test]
fn test_extract_parses_day_month_year_dates() {
    let (_temp_dir, csv_path) = create_temp_csv(&["15-03-2024,Delhi,Central,3,2"]);

    let df = load_dataset(&csv_path).unwrap();
    let records = extract_records(&df).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, date(15, 3, 2024));
    assert_eq!(records[0].state, "Delhi");
    assert_eq!(records[0].district, "Central");
    assert_eq!(records[0].age_5_to_17_updates, 3);
    assert_eq!(records[0].age_17_plus_updates, 2);
}

#[test]
fn test_extract_rejects_iso_dates() {
    // Year-first format must abort the run, not silently reinterpret.
    let (_temp_dir, csv_path) = create_temp_csv(&["2024-03-15,Delhi,Central,3,2"]);

    let df = load_dataset(&csv_path).unwrap();
    let result = extract_records(&df);

    assert!(result.is_err());
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("2024-03-15") && err_msg.contains("DD-MM-YYYY"),
        "Diagnostic should name the offending value: {err_msg}"
    );
}

#[test]
fn test_extract_aborts_on_first_bad_row() {
    let (_temp_dir, csv_path) = create_temp_csv(&[
        "01-01-2024,Delhi,Central,3,2",
        "bogus,Kerala,Kochi,1,1",
        "02-01-2024,Goa,Panaji,1,1",
    ]);

    let df = load_dataset(&csv_path).unwrap();
    let result = extract_records(&df);

    assert!(result.is_err(), "One malformed row aborts the whole run");
    assert!(result.unwrap_err().to_string().contains("row 1"));
}

#[test]
fn test_derive_total_is_exact_band_sum() {
    let records = derive_records(vec![raw("A", "X", 3, 2), raw("A", "X", 0, 5)]);

    assert_eq!(records.len(), 2, "Both rows have positive totals");
    for r in &records {
        assert_eq!(
            r.age_5_to_17_updates + r.age_17_plus_updates,
            r.total_biometric_updates
        );
        assert_eq!(r.total_biometric_updates, 5);
    }
}

#[test]
fn test_derive_drops_zero_total_rows() {
    let records = derive_records(vec![
        raw("A", "X", 0, 0),
        raw("B", "Y", 1, 0),
    ]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, "B");
    assert!(records.iter().all(|r| r.total_biometric_updates > 0));
}

#[test]
fn test_derive_percentages_sum_to_hundred() {
    let records = derive_records(vec![
        raw("A", "X", 3, 2),
        raw("B", "Y", 0, 7),
        raw("C", "Z", 11, 0),
    ]);

    for r in &records {
        let sum = r.pct_age_5_to_17 + r.pct_age_17_plus;
        assert!(
            (sum - 100.0).abs() < 1e-9,
            "Percentages should sum to 100, got {sum}"
        );
    }

    assert_eq!(records[0].pct_age_5_to_17, 60.0);
    assert_eq!(records[0].pct_age_17_plus, 40.0);
    assert_eq!(records[1].pct_age_5_to_17, 0.0);
    assert_eq!(records[2].pct_age_17_plus, 0.0);
}

#[test]
fn test_extract_reads_null_counts_as_zero() {
    let (_temp_dir, csv_path) = create_temp_csv(&["01-01-2024,Delhi,Central,,4"]);

    let df = load_dataset(&csv_path).unwrap();
    let records = extract_records(&df).unwrap();

    assert_eq!(records[0].age_5_to_17_updates, 0);
    assert_eq!(records[0].age_17_plus_updates, 4);
}
