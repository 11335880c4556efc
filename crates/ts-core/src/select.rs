//! Click-selection protocol.
//!
//! Render adapters never reach into filter state; they emit one of these
//! typed events when a plottable element is clicked, and the core applies
//! toggle semantics.

use tracing::debug;
use ts_data::ContentType;

use crate::filter::FilterState;

/// Selection message emitted by a render adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Country(String),
    Type(ContentType),
    Director(String),
}

impl FilterState {
    /// Click-to-select, click-again-to-deselect. Selecting a new value
    /// replaces whatever the dimension held before; each dimension holds
    /// at most one value.
    pub fn toggle(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Country(name) => toggle_slot(&mut self.selected_country, name),
            SelectionEvent::Type(ty) => toggle_slot(&mut self.selected_type, ty),
            SelectionEvent::Director(name) => toggle_slot(&mut self.selected_director, name),
        }
        debug!(
            country = ?self.selected_country,
            ty = ?self.selected_type,
            director = ?self.selected_director,
            "selection toggled"
        );
    }
}

fn toggle_slot<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut state = FilterState::default();

        state.toggle(SelectionEvent::Country("United States".to_owned()));
        assert_eq!(state.selected_country.as_deref(), Some("United States"));

        state.toggle(SelectionEvent::Country("United States".to_owned()));
        assert_eq!(state.selected_country, None);

        state.toggle(SelectionEvent::Country("United States".to_owned()));
        assert_eq!(state.selected_country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_toggle_replaces_prior_selection() {
        let mut state = FilterState::default();

        state.toggle(SelectionEvent::Director("Jane Doe".to_owned()));
        state.toggle(SelectionEvent::Director("John Roe".to_owned()));
        assert_eq!(state.selected_director.as_deref(), Some("John Roe"));
    }

    #[test]
    fn test_toggle_dimensions_are_independent() {
        let mut state = FilterState::default();

        state.toggle(SelectionEvent::Country("Canada".to_owned()));
        state.toggle(SelectionEvent::Type(ContentType::Movie));
        state.toggle(SelectionEvent::Type(ContentType::Movie));

        assert_eq!(state.selected_country.as_deref(), Some("Canada"));
        assert_eq!(state.selected_type, None);
    }
}
