use thiserror::Error;

/// Failures at the provider boundary (place search and geocoding).
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A single provider record is unusable. Handled inside normalization by
    /// dropping the record; never returned from a search.
    #[error("malformed place {id}: {reason}")]
    MalformedRecord { id: String, reason: String },
}

/// Failures surfaced to callers of [`crate::SearchOrchestrator`].
///
/// An empty result list is not an error.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("place lookup failed: {0}")]
    FetchFailed(#[source] PlacesError),

    #[error("no location found for \"{query}\"")]
    GeocodeNotFound { query: String },

    #[error("search radius must be a positive number of miles, got {0}")]
    InvalidRadius(f64),
}
