//! The live filter configuration.

use serde::{Deserialize, Serialize};
use ts_data::ContentType;

/// Year constraint. Single value when driven by the slider, inclusive
/// range when the UI runs in range mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearFilter {
    Single(i32),
    Range { min: i32, max: i32 },
}

impl YearFilter {
    pub fn contains(&self, year: i32) -> bool {
        match *self {
            Self::Single(selected) => year == selected,
            Self::Range { min, max } => (min..=max).contains(&year),
        }
    }
}

/// The one mutable filter configuration of a dashboard session.
///
/// `year`/`genre`/`rating` are written directly from their controls;
/// the three `selected_*` dimensions are written only through the
/// toggle protocol in `select`. `None` means the dimension is unset
/// (the "All" sentinel in the controls).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub year: Option<YearFilter>,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub selected_country: Option<String>,
    pub selected_type: Option<ContentType>,
    pub selected_director: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_contains() {
        assert!(YearFilter::Single(2020).contains(2020));
        assert!(!YearFilter::Single(2020).contains(2019));

        let range = YearFilter::Range { min: 2000, max: 2010 };
        assert!(range.contains(2000));
        assert!(range.contains(2010));
        assert!(!range.contains(2011));
    }

    #[test]
    fn test_default_state_is_unconstrained() {
        let state = FilterState::default();
        assert!(state.year.is_none());
        assert!(state.genre.is_none());
        assert!(state.rating.is_none());
        assert!(state.selected_country.is_none());
        assert!(state.selected_type.is_none());
        assert!(state.selected_director.is_none());
    }
}
