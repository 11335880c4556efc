//! Release-year trend.

use std::collections::BTreeMap;

use ts_core::{evaluate::filtered_ignoring_year, FilterState};
use ts_data::RecordStore;

/// Title counts per release year, ascending.
///
/// Applies every filter except the year selection; a trend-over-time view
/// under the year filter would always collapse to a single bar. This is the
/// one aggregate computed from its own evaluator call rather than the
/// shared subset.
pub fn year_trend(store: &RecordStore, state: &FilterState) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in filtered_ignoring_year(store, state) {
        *counts.entry(record.release_year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
