//! Network-facing collaborators the search orchestrator depends on.

use async_trait::async_trait;
use nearbite_core::Coordinate;

use crate::error::PlacesError;
use crate::types::RawPlace;

/// Fetches raw restaurant places around a coordinate.
#[async_trait]
pub trait PlaceFetcher: Send + Sync {
    /// Returns the provider's raw places within `radius_meters` of `reference`.
    async fn fetch_raw_places(
        &self,
        reference: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<RawPlace>, PlacesError>;
}

/// Resolves a free-text place name (city, neighbourhood) to a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns `Ok(None)` when the query matched nothing.
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, PlacesError>;
}
