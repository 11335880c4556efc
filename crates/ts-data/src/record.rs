//! Title record model and the soft-failing duration parsers.

use serde::{Deserialize, Serialize};

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    /// Parse the raw `type` column. Anything unrecognized is malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Movie" => Some(Self::Movie),
            "TV Show" | "Series" => Some(Self::Series),
            _ => None,
        }
    }

    /// Display label matching the source data.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "TV Show",
        }
    }
}

/// One catalog title. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    pub id: String,
    pub content_type: ContentType,
    pub title: String,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
    pub release_year: i32,
    pub rating: String,
    /// Free-text duration, kept raw. One of two shapes: minutes for movies
    /// (`"90 min"`) or a season count for series (`"2 Seasons"`). Parsed on
    /// demand via `runtime_minutes` / `season_count`.
    pub runtime_raw: String,
    pub genres: Vec<String>,
}

impl TitleRecord {
    /// Movie run time in minutes, when the duration text has that shape.
    pub fn runtime_minutes(&self) -> Option<u32> {
        parse_minutes(&self.runtime_raw)
    }

    /// Season count, when the duration text has that shape.
    pub fn season_count(&self) -> Option<u32> {
        parse_seasons(&self.runtime_raw)
    }
}

/// Split a comma-delimited text field into trimmed, non-empty tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a `"90 min"` style duration. Unparsable text is `None`, never an
/// error; the record still counts toward every non-numeric aggregate.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    raw.trim().strip_suffix("min")?.trim().parse().ok()
}

/// Parse a `"2 Seasons"` / `"1 Season"` style duration.
pub fn parse_seasons(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if !raw.contains("Season") {
        return None;
    }
    raw.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::parse("Movie"), Some(ContentType::Movie));
        assert_eq!(ContentType::parse("TV Show"), Some(ContentType::Series));
        assert_eq!(ContentType::parse(" Movie "), Some(ContentType::Movie));
        assert_eq!(ContentType::parse("Documentary"), None);
        assert_eq!(ContentType::parse(""), None);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("90 min"), Some(90));
        assert_eq!(parse_minutes("142 min "), Some(142));
        assert_eq!(parse_minutes("2 Seasons"), None);
        assert_eq!(parse_minutes("min"), None);
        assert_eq!(parse_minutes(""), None);
    }

    #[test]
    fn test_parse_seasons() {
        assert_eq!(parse_seasons("1 Season"), Some(1));
        assert_eq!(parse_seasons("4 Seasons"), Some(4));
        assert_eq!(parse_seasons("90 min"), None);
        assert_eq!(parse_seasons("Season"), None);
        assert_eq!(parse_seasons(""), None);
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(
            split_tokens("United States, Canada"),
            vec!["United States".to_string(), "Canada".to_string()]
        );
        assert_eq!(split_tokens(" , ,"), Vec::<String>::new());
        assert_eq!(split_tokens(""), Vec::<String>::new());
    }
}
