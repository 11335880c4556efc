//! Filter evaluator.

use ts_data::{RecordStore, TitleRecord};

use crate::filter::FilterState;

/// The filtered subset under every active predicate.
///
/// Predicates run in a fixed order (year, genre, rating, country, type,
/// director); each passes through when its filter is unset. They commute,
/// the order is fixed for determinism only. An empty result is valid.
pub fn filtered<'a>(store: &'a RecordStore, state: &FilterState) -> Vec<&'a TitleRecord> {
    apply(store, state, true)
}

/// Same composition with the year predicate left out.
///
/// The year trend is computed against this so the trend can show more than
/// the single selected year. Deliberate exception to the shared subset.
pub fn filtered_ignoring_year<'a>(
    store: &'a RecordStore,
    state: &FilterState,
) -> Vec<&'a TitleRecord> {
    apply(store, state, false)
}

fn apply<'a>(store: &'a RecordStore, state: &FilterState, use_year: bool) -> Vec<&'a TitleRecord> {
    store
        .records()
        .iter()
        .filter(|r| !use_year || state.year.map_or(true, |y| y.contains(r.release_year)))
        .filter(|r| match &state.genre {
            Some(genre) => r.genres.iter().any(|g| g == genre),
            None => true,
        })
        .filter(|r| match &state.rating {
            Some(rating) => &r.rating == rating,
            None => true,
        })
        .filter(|r| match &state.selected_country {
            Some(country) => r.countries.iter().any(|c| c == country),
            None => true,
        })
        .filter(|r| match state.selected_type {
            Some(ty) => r.content_type == ty,
            None => true,
        })
        .filter(|r| match &state.selected_director {
            Some(director) => r.directors.iter().any(|d| d == director),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::YearFilter;
    use ts_data::{ContentType, TitleRecord};

    fn record(id: &str, ty: ContentType, year: i32) -> TitleRecord {
        TitleRecord {
            id: id.to_owned(),
            content_type: ty,
            title: format!("Title {id}"),
            directors: Vec::new(),
            countries: Vec::new(),
            release_year: year,
            rating: "PG".to_owned(),
            runtime_raw: String::new(),
            genres: Vec::new(),
        }
    }

    fn store() -> RecordStore {
        let mut a = record("s1", ContentType::Movie, 2020);
        a.countries = vec!["United States".to_owned(), "Canada".to_owned()];
        a.genres = vec!["Dramas".to_owned()];
        a.directors = vec!["Jane Doe".to_owned()];

        let mut b = record("s2", ContentType::Series, 2020);
        b.countries = vec!["United States".to_owned()];
        b.genres = vec!["Comedies".to_owned()];

        let mut c = record("s3", ContentType::Movie, 2018);
        c.genres = vec!["Dramas".to_owned()];
        c.rating = "R".to_owned();

        RecordStore::from_records(vec![a, b, c])
    }

    #[test]
    fn test_unset_state_passes_everything_through() {
        let store = store();
        let subset = filtered(&store, &FilterState::default());
        assert_eq!(subset.len(), store.len());
    }

    #[test]
    fn test_predicates_compose() {
        let store = store();
        let state = FilterState {
            year: Some(YearFilter::Single(2020)),
            genre: Some("Dramas".to_owned()),
            ..Default::default()
        };
        let subset = filtered(&store, &state);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].id, "s1");
    }

    #[test]
    fn test_output_is_subset_passing_all_active_predicates() {
        let store = store();
        let state = FilterState {
            year: Some(YearFilter::Range { min: 2018, max: 2020 }),
            rating: Some("PG".to_owned()),
            selected_country: Some("United States".to_owned()),
            ..Default::default()
        };

        let subset = filtered(&store, &state);
        for record in &subset {
            assert!((2018..=2020).contains(&record.release_year));
            assert_eq!(record.rating, "PG");
            assert!(record.countries.iter().any(|c| c == "United States"));
        }
        // Every passing record appears exactly once.
        let expected: Vec<&str> = store
            .records()
            .iter()
            .filter(|r| {
                (2018..=2020).contains(&r.release_year)
                    && r.rating == "PG"
                    && r.countries.iter().any(|c| c == "United States")
            })
            .map(|r| r.id.as_str())
            .collect();
        let got: Vec<&str> = subset.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_director_match_is_exact_token() {
        let store = store();
        let state = FilterState {
            selected_director: Some("Jane".to_owned()),
            ..Default::default()
        };
        // "Jane" is not "Jane Doe"; substring matching would wrongly hit.
        assert!(filtered(&store, &state).is_empty());
    }

    #[test]
    fn test_ignoring_year_keeps_other_predicates() {
        let store = store();
        let state = FilterState {
            year: Some(YearFilter::Single(2020)),
            genre: Some("Dramas".to_owned()),
            ..Default::default()
        };
        let subset = filtered_ignoring_year(&store, &state);
        let ids: Vec<&str> = subset.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let store = store();
        let state = FilterState {
            year: Some(YearFilter::Single(1950)),
            ..Default::default()
        };
        assert!(filtered(&store, &state).is_empty());
    }
}
