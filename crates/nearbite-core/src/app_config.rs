use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Upper bound on the search radius offered to users, in miles.
pub const MAX_RADIUS_MILES: f64 = 30.0;

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub geoapify_api_key: Option<String>,
    pub places_base_url: String,
    pub geocoder_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub result_limit: u32,
    pub default_radius_miles: f64,
}

impl AppConfig {
    /// Returns the Geoapify API key, which only live searches need.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `GEOAPIFY_API_KEY` is unset
    /// or blank.
    pub fn require_geoapify_api_key(&self) -> Result<&str, ConfigError> {
        self.geoapify_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GEOAPIFY_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "geoapify_api_key",
                &self.geoapify_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("result_limit", &self.result_limit)
            .field("default_radius_miles", &self.default_radius_miles)
            .finish()
    }
}
