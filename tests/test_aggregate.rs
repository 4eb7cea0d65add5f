//! Unit tests for the grouped summaries

use biotrend::pipeline::{
    age_totals, summarize_districts, summarize_states, summarize_trend,
};

#[path = "common/mod.rs"]
mod common;

use common::{date, raw, raw_on, records, sample_records};

#[test]
fn test_same_state_rows_merge_into_one_summary_row() {
    // Two rows for state A, district X, totals 5 and 5.
    let recs = records(vec![raw("A", "X", 3, 2), raw("A", "X", 0, 5)]);

    let states = summarize_states(&recs);

    assert_eq!(states.len(), 1);
    assert_eq!(states[0].state, "A");
    assert_eq!(states[0].age_5_to_17_updates, 3);
    assert_eq!(states[0].age_17_plus_updates, 7);
    assert_eq!(states[0].total_biometric_updates, 10);
}

#[test]
fn test_state_summary_sorted_descending_with_stable_ties() {
    let recs = records(vec![
        raw("Small", "S1", 1, 0),
        raw("TieFirst", "T1", 2, 3),
        raw("Big", "B1", 50, 50),
        raw("TieSecond", "T2", 4, 1),
    ]);

    let states = summarize_states(&recs);

    let totals: Vec<u64> = states.iter().map(|s| s.total_biometric_updates).collect();
    assert!(
        totals.windows(2).all(|w| w[0] >= w[1]),
        "Totals must be non-increasing: {totals:?}"
    );
    assert_eq!(states[0].state, "Big");
    // Tied states keep first-encounter order.
    assert_eq!(states[1].state, "TieFirst");
    assert_eq!(states[2].state, "TieSecond");
    assert_eq!(states[3].state, "Small");
}

#[test]
fn test_state_summary_conserves_totals() {
    let recs = sample_records();

    let states = summarize_states(&recs);

    let distinct_states = {
        let mut names: Vec<&str> = recs.iter().map(|r| r.state.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    };
    assert_eq!(states.len(), distinct_states);

    let summary_total: u64 = states.iter().map(|s| s.total_biometric_updates).sum();
    let record_total: u64 = recs.iter().map(|r| r.total_biometric_updates).sum();
    assert_eq!(summary_total, record_total);
}

#[test]
fn test_district_summary_groups_by_state_district_pair() {
    let recs = records(vec![
        // Same district name under two states stays two groups.
        raw("Delhi", "Central", 3, 2),
        raw("Maharashtra", "Central", 1, 1),
        raw("Delhi", "Central", 5, 0),
    ]);

    let districts = summarize_districts(&recs);

    assert_eq!(districts.len(), 2);
    assert_eq!(districts[0].state, "Delhi");
    assert_eq!(districts[0].total_biometric_updates, 10);
    assert_eq!(districts[1].total_biometric_updates, 2);
}

#[test]
fn test_district_label_format() {
    let recs = records(vec![raw("Delhi", "Central", 3, 2)]);

    let districts = summarize_districts(&recs);

    assert_eq!(districts[0].label(), "Central (Delhi)");
}

#[test]
fn test_trend_is_ascending_by_date() {
    let recs = records(vec![
        raw_on("A", "X", date(3, 1, 2024), 1, 1),
        raw_on("B", "Y", date(1, 1, 2024), 2, 2),
        raw_on("A", "X", date(2, 1, 2024), 3, 3),
        raw_on("C", "Z", date(1, 1, 2024), 4, 4),
    ]);

    let trend = summarize_trend(&recs);

    assert_eq!(trend.len(), 3);
    assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
    // Both 01-01 rows sum across states.
    assert_eq!(trend[0].date, date(1, 1, 2024));
    assert_eq!(trend[0].total_biometric_updates, 12);
}

#[test]
fn test_age_totals_grand_sums() {
    let recs = sample_records();

    let ages = age_totals(&recs);

    let young: u64 = recs.iter().map(|r| r.age_5_to_17_updates).sum();
    let adult: u64 = recs.iter().map(|r| r.age_17_plus_updates).sum();
    assert_eq!(ages.age_5_to_17, young);
    assert_eq!(ages.age_17_plus, adult);
    assert_eq!(ages.total(), young + adult);
}

#[test]
fn test_empty_input_yields_empty_aggregates() {
    let recs = records(vec![]);

    assert!(summarize_states(&recs).is_empty());
    assert!(summarize_districts(&recs).is_empty());
    assert!(summarize_trend(&recs).is_empty());

    let ages = age_totals(&recs);
    assert_eq!((ages.age_5_to_17, ages.age_17_plus), (0, 0));
}

#[test]
fn test_summaries_are_deterministic() {
    let recs = sample_records();

    assert_eq!(summarize_states(&recs), summarize_states(&recs));
    assert_eq!(summarize_districts(&recs), summarize_districts(&recs));
    assert_eq!(summarize_trend(&recs), summarize_trend(&recs));
}
