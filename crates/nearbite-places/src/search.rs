//! Search orchestration: fetch around a coordinate, then normalize.

use nearbite_core::{Coordinate, Restaurant};

use crate::error::SearchError;
use crate::geo::miles_to_meters;
use crate::normalize::normalize_places;
use crate::ports::{Geocoder, PlaceFetcher};

/// Result of a city-name search: the resolved center plus the ranked list.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySearch {
    pub center: Coordinate,
    pub restaurants: Vec<Restaurant>,
}

/// Runs one restaurant search against a [`PlaceFetcher`].
///
/// Each call is independent. Fetch failures are surfaced once as
/// [`SearchError::FetchFailed`] without retrying.
pub struct SearchOrchestrator<F> {
    fetcher: F,
}

impl<F: PlaceFetcher> SearchOrchestrator<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Finds restaurants within `radius_miles` of `reference`, nearest first.
    ///
    /// Any positive radius is accepted; user-facing caps are the caller's
    /// concern.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidRadius`] if `radius_miles` is not a positive
    ///   finite number.
    /// - [`SearchError::FetchFailed`] if the provider call fails.
    pub async fn search(
        &self,
        reference: Coordinate,
        radius_miles: f64,
    ) -> Result<Vec<Restaurant>, SearchError> {
        if !(radius_miles.is_finite() && radius_miles > 0.0) {
            return Err(SearchError::InvalidRadius(radius_miles));
        }

        let radius_meters = miles_to_meters(radius_miles);
        let raw = self
            .fetcher
            .fetch_raw_places(reference, radius_meters)
            .await
            .map_err(SearchError::FetchFailed)?;

        let restaurants = normalize_places(raw, reference);
        tracing::info!(
            %reference,
            radius_miles,
            count = restaurants.len(),
            "restaurant search complete"
        );
        Ok(restaurants)
    }

    /// Geocodes `query` and searches around the resolved coordinate.
    ///
    /// # Errors
    ///
    /// - [`SearchError::GeocodeNotFound`] if the geocoder has no match.
    /// - [`SearchError::FetchFailed`] if geocoding or the place search fails.
    /// - [`SearchError::InvalidRadius`] as for [`Self::search`].
    pub async fn search_city<G: Geocoder + ?Sized>(
        &self,
        geocoder: &G,
        query: &str,
        radius_miles: f64,
    ) -> Result<CitySearch, SearchError> {
        // Check before spending a geocoder request.
        if !(radius_miles.is_finite() && radius_miles > 0.0) {
            return Err(SearchError::InvalidRadius(radius_miles));
        }

        let center = geocoder
            .geocode(query)
            .await
            .map_err(SearchError::FetchFailed)?
            .ok_or_else(|| SearchError::GeocodeNotFound {
                query: query.to_owned(),
            })?;

        let restaurants = self.search(center, radius_miles).await?;
        Ok(CitySearch {
            center,
            restaurants,
        })
    }
}
