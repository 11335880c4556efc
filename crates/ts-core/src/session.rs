//! Dashboard session context.

use tracing::info;
use ts_data::RecordStore;

use crate::filter::{FilterState, YearFilter};

/// Owns everything one dashboard session touches: the frozen store and the
/// live filter configuration. Threading this through explicitly keeps the
/// mutable state out of globals.
pub struct Session {
    store: RecordStore,
    pub filters: FilterState,
}

impl Session {
    /// Start a session over a loaded store. The year filter starts at the
    /// most recent release year, matching the year slider's initial value.
    pub fn new(store: RecordStore) -> Self {
        let filters = FilterState {
            year: store.year_bounds().map(|(_, max)| YearFilter::Single(max)),
            ..FilterState::default()
        };
        info!(records = store.len(), initial_year = ?filters.year, "session started");
        Self { store, filters }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_data::{ContentType, TitleRecord};

    fn record(year: i32) -> TitleRecord {
        TitleRecord {
            id: format!("s{year}"),
            content_type: ContentType::Movie,
            title: "T".to_owned(),
            directors: Vec::new(),
            countries: Vec::new(),
            release_year: year,
            rating: "PG".to_owned(),
            runtime_raw: String::new(),
            genres: Vec::new(),
        }
    }

    #[test]
    fn test_session_starts_at_latest_year() {
        let store = RecordStore::from_records(vec![record(2001), record(2021), record(2015)]);
        let session = Session::new(store);
        assert_eq!(session.filters.year, Some(YearFilter::Single(2021)));
    }

    #[test]
    fn test_session_over_empty_store_has_no_year() {
        let session = Session::new(RecordStore::from_records(Vec::new()));
        assert_eq!(session.filters.year, None);
    }
}
