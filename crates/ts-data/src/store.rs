//! The frozen record store.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::record::{split_tokens, ContentType, TitleRecord};
use crate::sources::RawTitleRow;

/// Rating label used when the source row carries none.
pub const UNKNOWN_RATING: &str = "Unknown";

/// Immutable, normalized collection of title records. Built once at load;
/// every later computation reads from it and never writes.
pub struct RecordStore {
    records: Vec<TitleRecord>,
}

impl RecordStore {
    /// Build the store from raw rows. Rows lacking a title, a recognizable
    /// type, or a parseable release year are dropped whole, never admitted
    /// partially.
    pub fn load<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawTitleRow>,
    {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for row in rows {
            match Self::admit(row) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        info!(admitted = records.len(), dropped, "record store built");
        Self { records }
    }

    /// Build a store directly from already-normalized records.
    /// `load` is the ingestion path; this exists for programmatic setups
    /// and tests that construct records by hand.
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        Self { records }
    }

    fn admit(row: RawTitleRow) -> Option<TitleRecord> {
        let title = row.title.trim();
        if title.is_empty() {
            warn!(id = %row.show_id, "dropping row without title");
            return None;
        }

        let content_type = match ContentType::parse(&row.content_type) {
            Some(ty) => ty,
            None => {
                warn!(id = %row.show_id, raw = %row.content_type, "dropping row with unrecognized type");
                return None;
            }
        };

        let release_year = match row.release_year.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                warn!(id = %row.show_id, raw = %row.release_year, "dropping row without release year");
                return None;
            }
        };

        let rating = match row.rating.trim() {
            "" => UNKNOWN_RATING.to_owned(),
            label => label.to_owned(),
        };

        Some(TitleRecord {
            id: row.show_id,
            content_type,
            title: title.to_owned(),
            directors: split_tokens(&row.director),
            countries: split_tokens(&row.country),
            release_year,
            rating,
            runtime_raw: row.duration.trim().to_owned(),
            genres: split_tokens(&row.listed_in),
        })
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min and max release year present, for the year control's range.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.release_year).min()?;
        let max = self.records.iter().map(|r| r.release_year).max()?;
        Some((min, max))
    }

    /// Distinct genre labels, sorted. Feeds the genre selector.
    pub fn genres(&self) -> Vec<String> {
        self.distinct(|record| record.genres.iter().cloned().collect())
    }

    /// Distinct rating labels, sorted. Feeds the rating selector.
    pub fn ratings(&self) -> Vec<String> {
        self.distinct(|record| vec![record.rating.clone()])
    }

    fn distinct<F>(&self, values: F) -> Vec<String>
    where
        F: Fn(&TitleRecord) -> Vec<String>,
    {
        let set: BTreeSet<String> = self.records.iter().flat_map(|r| values(r)).collect();
        set.into_iter().collect()
    }
}
