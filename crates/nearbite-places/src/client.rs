//! HTTP client for the Geoapify Places API.
//!
//! Issues a single `GET /v2/places` restricted to restaurants inside a circle
//! around the reference coordinate. Failures are returned as typed
//! [`PlacesError`]s; retry policy is left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use nearbite_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::ports::PlaceFetcher;
use crate::types::{PlacesResponse, RawPlace};

const DEFAULT_BASE_URL: &str = "https://api.geoapify.com/";

/// Geoapify category covering sit-down restaurants of every cuisine.
const RESTAURANT_CATEGORY: &str = "catering.restaurant";

/// Client for the Geoapify `/v2/places` endpoint.
///
/// Use [`GeoapifyClient::new`] for production or
/// [`GeoapifyClient::with_base_url`] to point at a mock server in tests.
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    base_url: Url,
    limit: u32,
}

impl GeoapifyClient {
    /// Creates a client pointed at the production Geoapify API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        limit: u32,
    ) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, limit, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        limit: u32,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parse_base_url(base_url)?,
            limit,
        })
    }

    /// Builds the search URL. Geoapify expects `lon,lat` order in filters.
    fn places_url(&self, reference: Coordinate, radius_meters: f64) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join("v2/places")
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let lon_lat = format!("{},{}", reference.longitude, reference.latitude);
        url.query_pairs_mut()
            .append_pair("categories", RESTAURANT_CATEGORY)
            .append_pair("filter", &format!("circle:{lon_lat},{radius_meters:.0}"))
            .append_pair("bias", &format!("proximity:{lon_lat}"))
            .append_pair("limit", &self.limit.to_string())
            .append_pair("apiKey", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl PlaceFetcher for GeoapifyClient {
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network or TLS failure.
    /// - [`PlacesError::UnexpectedStatus`] on any non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body is not a `FeatureCollection`.
    async fn fetch_raw_places(
        &self,
        reference: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let url = self.places_url(reference, radius_meters)?;

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Strip the key before it reaches logs or error messages.
            let redacted = redact_api_key(&url);
            tracing::warn!(
                status = status.as_u16(),
                url = redacted.as_str(),
                "place search failed"
            );
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url: redacted,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<PlacesResponse>(&body).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("places around {reference}"),
                source: e,
            }
        })?;

        let places = parsed.into_raw_places();
        tracing::debug!(%reference, radius_meters, count = places.len(), "fetched raw places");
        Ok(places)
    }
}

/// Normalise: ensure the base URL ends with exactly one slash so `join`
/// appends to the path instead of replacing its last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, PlacesError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" {
                "[redacted]".into()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
