//! Free-text geocoding via the Nominatim `/search` endpoint.
//!
//! Nominatim returns a JSON array of matches with `lat`/`lon` encoded as
//! strings. Only the top match is requested. An empty array is a valid
//! "not found" answer, not an error.

use std::time::Duration;

use async_trait::async_trait;
use nearbite_core::Coordinate;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::client::parse_base_url;
use crate::error::PlacesError;
use crate::ports::Geocoder;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

#[derive(Debug, Deserialize)]
struct NominatimMatch {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Client for Nominatim. Nominatim's usage policy requires an identifying
/// `User-Agent`, so one is always set.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (self-hosted Nominatim or tests).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network or TLS failure.
    /// - [`PlacesError::UnexpectedStatus`] on any non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body is not a match array or the
    ///   top match carries unparseable coordinates.
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, PlacesError> {
        let url = self.search_url(query)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), query, "geocoding failed");
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let matches = serde_json::from_str::<Vec<NominatimMatch>>(&body).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("geocode(q={query})"),
                source: e,
            }
        })?;

        let Some(top) = matches.into_iter().next() else {
            tracing::debug!(query, "geocoder found no match");
            return Ok(None);
        };

        let coordinate = parse_match(&top).map_err(|e| PlacesError::Deserialize {
            context: format!("geocode(q={query}) coordinates"),
            source: e,
        })?;

        tracing::debug!(
            query,
            display_name = top.display_name.as_deref().unwrap_or(""),
            %coordinate,
            "geocoded query"
        );
        Ok(Some(coordinate))
    }
}

/// Nominatim encodes coordinates as JSON strings; parse them as JSON numbers
/// so failures share the `serde_json::Error` type with the rest of the body.
fn parse_match(m: &NominatimMatch) -> Result<Coordinate, serde_json::Error> {
    let latitude: f64 = serde_json::from_str(m.lat.trim())?;
    let longitude: f64 = serde_json::from_str(m.lon.trim())?;
    Ok(Coordinate::new(latitude, longitude))
}
