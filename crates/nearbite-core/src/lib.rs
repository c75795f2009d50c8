pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod restaurant;

pub use app_config::{AppConfig, Environment, MAX_RADIUS_MILES};
pub use config::{load_app_config, load_app_config_from_env, parse_radius};
pub use coordinate::Coordinate;
pub use restaurant::Restaurant;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("cannot parse coordinate \"{0}\": expected \"lat,lon\"")]
    ParseCoordinate(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
