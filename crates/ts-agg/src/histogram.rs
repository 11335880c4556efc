//! Numeric distributions: movie run times and season counts.

use std::collections::BTreeMap;

use ts_data::{ContentType, TitleRecord};

/// Bin count for the run-time histogram.
pub const RUNTIME_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width binning of movie run times over the observed extent of the
/// filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeHistogram {
    pub min: u32,
    pub max: u32,
    pub bins: Vec<HistogramBin>,
    /// Number of records that contributed a parseable minute value.
    pub sample_count: usize,
}

/// `None` when no movie duration in the subset parses as minutes; there is
/// nothing to bin, and the view shows its "no data" placeholder instead.
pub fn runtime_histogram(subset: &[&TitleRecord]) -> Option<RuntimeHistogram> {
    let minutes: Vec<u32> = subset
        .iter()
        .filter(|r| r.content_type == ContentType::Movie)
        .filter_map(|r| r.runtime_minutes())
        .collect();

    let min = minutes.iter().copied().min()?;
    let max = minutes.iter().copied().max()?;
    let width = f64::from(max - min) / RUNTIME_BINS as f64;

    let mut bins: Vec<HistogramBin> = (0..RUNTIME_BINS)
        .map(|i| HistogramBin {
            start: f64::from(min) + width * i as f64,
            end: f64::from(min) + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &value in &minutes {
        // Max-inclusive last bin; a degenerate extent lands everything in
        // the first bin.
        let index = if width > 0.0 {
            ((f64::from(value - min) / width) as usize).min(RUNTIME_BINS - 1)
        } else {
            0
        };
        bins[index].count += 1;
    }

    Some(RuntimeHistogram {
        min,
        max,
        bins,
        sample_count: minutes.len(),
    })
}

/// Season counts grouped by exact value, ascending. Season counts are
/// small discrete integers, so no binning.
pub fn season_distribution(subset: &[&TitleRecord]) -> Vec<(u32, usize)> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in subset
        .iter()
        .filter(|r| r.content_type == ContentType::Series)
    {
        if let Some(seasons) = record.season_count() {
            *counts.entry(seasons).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_histogram_counts_sum_to_parseable_values() {
        let records = vec![
            record(ContentType::Movie, "60 min"),
            record(ContentType::Movie, "95 min"),
            record(ContentType::Movie, "160 min"),
            record(ContentType::Movie, "unknown"),
            record(ContentType::Series, "2 Seasons"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let histogram = runtime_histogram(&subset).unwrap();
        assert_eq!(histogram.min, 60);
        assert_eq!(histogram.max, 160);
        assert_eq!(histogram.bins.len(), RUNTIME_BINS);
        assert_eq!(histogram.sample_count, 3);

        let total: usize = histogram.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_histogram_max_value_lands_in_last_bin() {
        let records = vec![
            record(ContentType::Movie, "10 min"),
            record(ContentType::Movie, "110 min"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let histogram = runtime_histogram(&subset).unwrap();
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[RUNTIME_BINS - 1].count, 1);
    }

    #[test]
    fn test_histogram_degenerate_extent() {
        let records = vec![
            record(ContentType::Movie, "90 min"),
            record(ContentType::Movie, "90 min"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let histogram = runtime_histogram(&subset).unwrap();
        let total: usize = histogram.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert_eq!(histogram.bins[0].count, 2);
    }

    #[test]
    fn test_histogram_none_without_parseable_movies() {
        let records = vec![
            record(ContentType::Series, "2 Seasons"),
            record(ContentType::Movie, "n/a"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();
        assert!(runtime_histogram(&subset).is_none());
        assert!(runtime_histogram(&[]).is_none());
    }

    #[test]
    fn test_season_distribution_sorted_ascending() {
        let records = vec![
            record(ContentType::Series, "3 Seasons"),
            record(ContentType::Series, "1 Season"),
            record(ContentType::Series, "1 Season"),
            record(ContentType::Series, "bad"),
            record(ContentType::Movie, "90 min"),
        ];
        let subset: Vec<&TitleRecord> = records.iter().collect();

        let distribution = season_distribution(&subset);
        assert_eq!(distribution, vec![(1, 2), (3, 1)]);
    }

    #[test]
    fn test_season_distribution_empty() {
        assert!(season_distribution(&[]).is_empty());
    }
}
