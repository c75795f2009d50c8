use serde::Serialize;

use crate::Coordinate;

/// A restaurant normalized from a place-search provider, ready for ranked display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    /// Provider place ID, or a derived key when the provider omitted one.
    /// Unique within one result set only.
    pub id: String,
    pub name: String,
    /// Full formatted address for display.
    pub address: String,
    /// Address with the leading venue name stripped. Dedup key, never displayed.
    #[serde(skip)]
    pub cleaned_address: String,
    /// Great-circle distance from the search reference. `None` when the
    /// provider gave no coordinate; zero means co-located.
    pub distance_miles: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Human-readable cuisine/venue labels, e.g. `["Pizza"]`.
    pub categories: Vec<String>,
    /// Icon key picked by the category classifier (e.g. `"pizza"`, `"utensils"`).
    pub icon: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Restaurant {
    /// Returns the venue position when the provider supplied both coordinates.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }

    /// Formats the distance for display, `"N/A"` when unknown.
    #[must_use]
    pub fn distance_label(&self) -> String {
        self.distance_miles
            .map_or_else(|| "N/A".to_string(), |d| format!("{d:.2} mi"))
    }
}
