//! Title word frequencies.

use ahash::AHashSet;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use ts_data::TitleRecord;

/// Ranking depth of the word-frequency table.
pub const TOP_WORDS: usize = 60;

/// Tokens too common to say anything about a catalog.
static STOPWORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "de", "el", "for", "from", "how", "i",
        "in", "is", "it", "la", "my", "no", "of", "on", "or", "that", "the", "to", "was", "with",
        "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Ranked word counts over every filtered title: lower-cased, split on
/// anything non-alphanumeric, stopwords dropped, top `TOP_WORDS` by
/// descending count with first-encountered tie order. This feeds the word
/// cloud layout; the ranking is where this engine's responsibility ends.
pub fn word_frequencies(subset: &[&TitleRecord]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for record in subset {
        let cleaned: String = record
            .title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        for token in cleaned.split_whitespace() {
            if STOPWORDS.contains(token) {
                continue;
            }
            *counts.entry(token.to_owned()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_WORDS);
    ranked
}
