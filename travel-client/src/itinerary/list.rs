//! Ranked itinerary list with single selection.

use super::rank::Itinerary;

/// The result of one search: ranked itineraries plus the detail selection.
///
/// At most one itinerary is selected for detail display at a time.
/// Selecting another one replaces the selection; re-selecting the current
/// one is a no-op, not a toggle. A new search builds a fresh list, which
/// drops any previous selection along with the old results.
#[derive(Debug, Clone, Default)]
pub struct ItineraryList {
    items: Vec<Itinerary>,
    selected: Option<usize>,
}

impl ItineraryList {
    /// Wrap ranked itineraries with no selection.
    pub fn new(items: Vec<Itinerary>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// An empty result list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The ranked itineraries, best-first.
    pub fn items(&self) -> &[Itinerary] {
        &self.items
    }

    /// Number of itineraries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the search produced no itineraries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Select the itinerary at `index` for detail display.
    ///
    /// Returns whether a selection is now in place. Out-of-range indices
    /// leave the current selection untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// The currently selected itinerary, if any.
    pub fn selected(&self) -> Option<&Itinerary> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Index of the current selection.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    fn itinerary(name: &str, legs: usize) -> Itinerary {
        Itinerary {
            route: Route { stops: vec![] },
            leg_count: legs,
            display_name: name.to_string(),
        }
    }

    fn list() -> ItineraryList {
        ItineraryList::new(vec![itinerary("Direct Route", 1), itinerary("Via LHR", 2)])
    }

    #[test]
    fn starts_unselected() {
        assert!(list().selected().is_none());
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut results = list();
        assert!(results.select(0));
        assert!(results.select(0));
        assert_eq!(results.selected_index(), Some(0));
        assert_eq!(results.selected().unwrap().display_name, "Direct Route");
    }

    #[test]
    fn selecting_another_replaces_the_selection() {
        let mut results = list();
        results.select(0);
        results.select(1);
        assert_eq!(results.selected_index(), Some(1));
        assert_eq!(results.selected().unwrap().display_name, "Via LHR");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut results = list();
        results.select(1);
        assert!(!results.select(5));
        assert_eq!(results.selected_index(), Some(1));
    }

    #[test]
    fn clear_selection_closes_detail() {
        let mut results = list();
        results.select(0);
        results.clear_selection();
        assert!(results.selected().is_none());
    }

    #[test]
    fn empty_list_cannot_select() {
        let mut results = ItineraryList::empty();
        assert!(!results.select(0));
        assert!(results.selected().is_none());
    }
}
