//! Categorical rollups.

use indexmap::IndexMap;
use ts_data::{ContentType, TitleRecord};

/// Ranking depth of the director rollup.
pub const TOP_DIRECTORS: usize = 10;

/// Count per content type present, in first-encountered order.
pub fn type_rollup(subset: &[&TitleRecord]) -> Vec<(ContentType, usize)> {
    let mut counts: IndexMap<ContentType, usize> = IndexMap::new();
    for record in subset {
        *counts.entry(record.content_type).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Count per country over exploded membership: a title listing two
/// countries contributes one to each, never deduplicated per title.
pub fn country_rollup(subset: &[&TitleRecord]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in subset {
        for country in &record.countries {
            *counts.entry(country.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Top directors by exploded membership, descending count. The sort is
/// stable over insertion order, so ties keep first-encountered order.
pub fn director_rollup(subset: &[&TitleRecord]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in subset {
        for director in &record.directors {
            *counts.entry(director.clone()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_DIRECTORS);
    ranked
}
