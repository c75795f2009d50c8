//! Provider response types for the Geoapify Places API (`/v2/places`).
//!
//! ## Observed shape
//!
//! The endpoint returns a GeoJSON `FeatureCollection`. Every useful field lives
//! under `features[].properties`:
//!
//! - `place_id`: opaque string, stable per provider but not across providers.
//! - `name`: absent for some unnamed amenities (food courts, kiosks).
//! - `formatted`: full one-line address, usually prefixed with the venue name
//!   (`"Joe's Pizza, 1 Main St, ..."`). Some records repeat the address
//!   without the name, which is why dedup strips the name first.
//! - `lat` / `lon`: usually present; the `Point` geometry carries the same
//!   position as `[lon, lat]` and is used as a fallback.
//! - `categories`: dot-namespaced tags such as `"catering.restaurant.pizza"`.
//!   Omitted entirely on some records, hence `#[serde(default)]`.
//! - `contact.phone`, `website`: optional.

use serde::Deserialize;

/// Top-level response from `GET /v2/places`.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub features: Vec<PlaceFeature>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceFeature {
    pub properties: PlaceProperties,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceProperties {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub website: Option<String>,
    pub contact: Option<PlaceContact>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceContact {
    pub phone: Option<String>,
}

/// GeoJSON geometry. Only `Point` carries a usable position.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Nested arrays for non-point geometries, so kept untyped.
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl PointGeometry {
    /// Returns `(lat, lon)` for a `Point` geometry. GeoJSON order is `[lon, lat]`.
    fn lat_lon(&self) -> Option<(f64, f64)> {
        if self.kind != "Point" {
            return None;
        }
        let pair = self.coordinates.as_array()?;
        let lon = pair.first()?.as_f64()?;
        let lat = pair.get(1)?.as_f64()?;
        Some((lat, lon))
    }
}

/// A provider place record before validation.
///
/// Only presence is modelled here; [`crate::normalize_place`] decides
/// whether the record is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub categories: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl From<PlaceFeature> for RawPlace {
    fn from(feature: PlaceFeature) -> Self {
        let props = feature.properties;

        // Take the coordinate pair from one source only, so a half-populated
        // properties block cannot mix with the geometry.
        let (latitude, longitude) = match (props.lat, props.lon) {
            (Some(lat), Some(lon)) => (Some(lat), Some(lon)),
            (lat, lon) => match feature.geometry.as_ref().and_then(PointGeometry::lat_lon) {
                Some((g_lat, g_lon)) => (Some(g_lat), Some(g_lon)),
                None => (lat, lon),
            },
        };

        Self {
            id: props.place_id,
            name: props.name,
            address: props.formatted,
            latitude,
            longitude,
            categories: props.categories,
            phone: props.contact.and_then(|c| c.phone),
            website: props.website,
        }
    }
}

impl PlacesResponse {
    #[must_use]
    pub fn into_raw_places(self) -> Vec<RawPlace> {
        self.features.into_iter().map(RawPlace::from).collect()
    }
}
