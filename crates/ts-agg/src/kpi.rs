//! Headline counters.

use ts_data::{ContentType, TitleRecord};

/// Scalar KPIs for the current filtered subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub total: usize,
    pub movies: usize,
    pub series: usize,
    /// Mean movie run time in minutes, rounded to the nearest integer.
    /// `None` when no movie duration in the subset parses.
    pub avg_movie_minutes: Option<u32>,
    /// Mean season count, rounded to one decimal. Same soft-parse rule.
    pub avg_seasons: Option<f64>,
}

pub fn kpis(subset: &[&TitleRecord]) -> KpiSummary {
    let movies = subset
        .iter()
        .filter(|r| r.content_type == ContentType::Movie)
        .count();
    let series = subset
        .iter()
        .filter(|r| r.content_type == ContentType::Series)
        .count();

    let minutes: Vec<u32> = subset
        .iter()
        .filter(|r| r.content_type == ContentType::Movie)
        .filter_map(|r| r.runtime_minutes())
        .collect();
    let seasons: Vec<u32> = subset
        .iter()
        .filter(|r| r.content_type == ContentType::Series)
        .filter_map(|r| r.season_count())
        .collect();

    KpiSummary {
        total: subset.len(),
        movies,
        series,
        avg_movie_minutes: mean(&minutes).map(|m| m.round() as u32),
        avg_seasons: mean(&seasons).map(|m| (m * 10.0).round() / 10.0),
    }
}

fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_data::TitleRecord;

    fn record(ty: ContentType, duration: &str) -> TitleRecord {
        TitleRecord {
            id: String::new(),
            content_type: ty,
            title: "T".to_owned(),
            directors: Vec::new(),
            countries: Vec::new(),
            release_year: 2020,
            rating: "PG".to_owned(),
            runtime_raw: duration.to_owned(),
            genres: Vec::new(),
        }
    }

    #[test]
    fn test_kpis_counts_and_means() {
        let records = vec![
            record(ContentType::Movie, "90 min"),
            record(ContentType::Movie, "101 min"),
            record(ContentType::Series, "2 Seasons"),
            record(ContentType::Series, "3 Seasons"),
            record(ContentType::Series, "1 Season"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let summary = kpis(&subset);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.movies, 2);
        assert_eq!(summary.series, 3);
        // (90 + 101) / 2 = 95.5, rounds to 96
        assert_eq!(summary.avg_movie_minutes, Some(96));
        assert_eq!(summary.avg_seasons, Some(2.0));
    }

    #[test]
    fn test_unparsable_durations_are_skipped_not_fatal() {
        let records = vec![
            record(ContentType::Movie, "90 min"),
            record(ContentType::Movie, "??"),
            record(ContentType::Series, "n/a"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let summary = kpis(&subset);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.avg_movie_minutes, Some(90));
        assert_eq!(summary.avg_seasons, None);
    }

    #[test]
    fn test_empty_subset_yields_unavailable_means() {
        let summary = kpis(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_movie_minutes, None);
        assert_eq!(summary.avg_seasons, None);
    }
}
