pub mod address;
pub mod classify;
pub mod client;
pub mod error;
pub mod geo;
pub mod geocode;
pub mod normalize;
pub mod ports;
pub mod search;
pub mod sequence;
pub mod types;

pub use address::clean_address;
pub use classify::{classify, Classification};
pub use client::GeoapifyClient;
pub use error::{PlacesError, SearchError};
pub use geo::haversine_miles;
pub use geocode::NominatimClient;
pub use normalize::{normalize_place, normalize_places};
pub use ports::{Geocoder, PlaceFetcher};
pub use search::{CitySearch, SearchOrchestrator};
pub use sequence::{SearchSequencer, SearchTicket};
pub use types::RawPlace;
