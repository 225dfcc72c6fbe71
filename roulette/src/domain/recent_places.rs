//! Bounded, newest-first history of recommended places.

use std::collections::VecDeque;

use super::Place;

/// Maximum number of places remembered for the exclusion list.
pub const RECENT_PLACES_CAPACITY: usize = 10;

/// Newest-first history of recommendations, capped at
/// [`RECENT_PLACES_CAPACITY`].
///
/// Entries are only ever inserted at the front and dropped from the tail.
///
/// # Examples
/// ```
/// use roulette::domain::RecentPlaces;
///
/// let history = RecentPlaces::default();
/// assert!(history.is_empty());
/// assert!(history.exclusion_names().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentPlaces {
    entries: VecDeque<Place>,
}

impl RecentPlaces {
    /// Prepend a place, evicting the oldest entry beyond capacity.
    pub fn record(&mut self, place: Place) {
        self.entries.push_front(place);
        self.entries.truncate(RECENT_PLACES_CAPACITY);
    }

    /// Names of remembered places, newest first, for the prompt exclusion list.
    #[must_use]
    pub fn exclusion_names(&self) -> Vec<String> {
        self.iter().map(|place| place.name.clone()).collect()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.entries.iter()
    }

    /// Number of remembered places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recommended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
