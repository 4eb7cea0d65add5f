//! Grouped summaries over the retained records
//!
//! Three independent groupings feed the report tables and charts: by
//! state, by (state, district) pair, and by date. Descending sorts are
//! stable, so tied groups keep their first-encounter order.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::pipeline::transform::UpdateRecord;

/// Per-state totals, ordered by total updates descending.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSummary {
    pub state: String,
    pub age_5_to_17_updates: u64,
    pub age_17_plus_updates: u64,
    pub total_biometric_updates: u64,
}

/// Per-(state, district) totals, ordered by total updates descending.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictSummary {
    pub state: String,
    pub district: String,
    pub total_biometric_updates: u64,
}

impl DistrictSummary {
    /// Chart label of the form `"Central (Delhi)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.district, self.state)
    }
}

/// Total updates on one date, across all states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_biometric_updates: u64,
}

/// Grand totals of the two age bands across the retained set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeTotals {
    pub age_5_to_17: u64,
    pub age_17_plus: u64,
}

impl AgeTotals {
    pub fn total(&self) -> u64 {
        self.age_5_to_17 + self.age_17_plus
    }
}

/// Group by state, summing both age-band counts and the total.
pub fn summarize_states(records: &[UpdateRecord]) -> Vec<StateSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<StateSummary> = Vec::new();

    for r in records {
        let i = *index.entry(r.state.as_str()).or_insert_with(|| {
            rows.push(StateSummary {
                state: r.state.clone(),
                age_5_to_17_updates: 0,
                age_17_plus_updates: 0,
                total_biometric_updates: 0,
            });
            rows.len() - 1
        });
        rows[i].age_5_to_17_updates += r.age_5_to_17_updates;
        rows[i].age_17_plus_updates += r.age_17_plus_updates;
        rows[i].total_biometric_updates += r.total_biometric_updates;
    }

    rows.sort_by(|a, b| b.total_biometric_updates.cmp(&a.total_biometric_updates));
    rows
}

/// Group by (state, district), summing the total.
pub fn summarize_districts(records: &[UpdateRecord]) -> Vec<DistrictSummary> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<DistrictSummary> = Vec::new();

    for r in records {
        let i = *index
            .entry((r.state.as_str(), r.district.as_str()))
            .or_insert_with(|| {
                rows.push(DistrictSummary {
                    state: r.state.clone(),
                    district: r.district.clone(),
                    total_biometric_updates: 0,
                });
                rows.len() - 1
            });
        rows[i].total_biometric_updates += r.total_biometric_updates;
    }

    rows.sort_by(|a, b| b.total_biometric_updates.cmp(&a.total_biometric_updates));
    rows
}

/// Group by date, summing the total, in ascending date order.
pub fn summarize_trend(records: &[UpdateRecord]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in records {
        *by_date.entry(r.date).or_insert(0) += r.total_biometric_updates;
    }

    by_date
        .into_iter()
        .map(|(date, total_biometric_updates)| TrendPoint {
            date,
            total_biometric_updates,
        })
        .collect()
}

/// Grand totals of both age bands; `(0, 0)` for an empty set.
pub fn age_totals(records: &[UpdateRecord]) -> AgeTotals {
    records.iter().fold(AgeTotals::default(), |mut acc, r| {
        acc.age_5_to_17 += r.age_5_to_17_updates;
        acc.age_17_plus += r.age_17_plus_updates;
        acc
    })
}
