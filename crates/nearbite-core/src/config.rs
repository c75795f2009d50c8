use crate::app_config::{AppConfig, Environment, MAX_RADIUS_MILES};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NEARBITE_ENV", "development"));
    let log_level = or_default("NEARBITE_LOG_LEVEL", "info");

    // An empty key in `.env` is the same as no key.
    let geoapify_api_key = lookup("GEOAPIFY_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    let places_base_url = or_default("NEARBITE_PLACES_BASE_URL", "https://api.geoapify.com/");
    let geocoder_base_url = or_default(
        "NEARBITE_GEOCODER_BASE_URL",
        "https://nominatim.openstreetmap.org/",
    );

    let request_timeout_secs = parse_u64("NEARBITE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NEARBITE_USER_AGENT", "nearbite/0.1 (restaurant-search)");

    let result_limit = parse_u32("NEARBITE_RESULT_LIMIT", "50")?;
    if result_limit == 0 {
        return Err(invalid("NEARBITE_RESULT_LIMIT", "must be at least 1".into()));
    }

    let default_radius_miles = parse_radius(&or_default("NEARBITE_DEFAULT_RADIUS_MILES", "5"))
        .map_err(|reason| invalid("NEARBITE_DEFAULT_RADIUS_MILES", reason))?;

    Ok(AppConfig {
        env,
        log_level,
        geoapify_api_key,
        places_base_url,
        geocoder_base_url,
        request_timeout_secs,
        user_agent,
        result_limit,
        default_radius_miles,
    })
}

/// Parse a user-facing search radius in miles, bounded to `(0, MAX_RADIUS_MILES]`.
///
/// # Errors
///
/// Returns a human-readable reason when the value is not a number or falls
/// outside the accepted range.
pub fn parse_radius(raw: &str) -> Result<f64, String> {
    let miles = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("\"{raw}\" is not a number: {e}"))?;
    if miles.is_finite() && miles > 0.0 && miles <= MAX_RADIUS_MILES {
        Ok(miles)
    } else {
        Err(format!(
            "radius must be greater than 0 and at most {MAX_RADIUS_MILES} miles, got {raw}"
        ))
    }
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
