use crate::app_config::{
    AppConfig, RegistryEndpoint, DEFAULT_GEOCODER_BASE_URL, DEFAULT_REGISTRY_BASE_URL,
};
use crate::types::Coordinate;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str| -> Result<f64, ConfigError> {
        let raw = require(var)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("CHDIST_API_KEY")?;

    let latitude = parse_f64("CHDIST_REFERENCE_LAT")?;
    let longitude = parse_f64("CHDIST_REFERENCE_LON")?;
    let reference =
        Coordinate::new(latitude, longitude).map_err(|e| ConfigError::InvalidEnvVar {
            var: "CHDIST_REFERENCE_LAT/CHDIST_REFERENCE_LON".to_string(),
            reason: e.to_string(),
        })?;

    let location_filter = lookup("CHDIST_LOCATION_FILTER")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let registry_base_url = or_default("CHDIST_REGISTRY_BASE_URL", DEFAULT_REGISTRY_BASE_URL);
    let registry_endpoint =
        parse_registry_endpoint(&or_default("CHDIST_REGISTRY_ENDPOINT", "advanced"))?;
    let geocoder_base_url = or_default("CHDIST_GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL);

    let request_timeout_secs = parse_u64("CHDIST_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CHDIST_USER_AGENT", "chdist/0.1 (company-distance)");
    let log_level = or_default("CHDIST_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_key,
        reference,
        location_filter,
        registry_base_url,
        registry_endpoint,
        geocoder_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Parse a string into a `RegistryEndpoint` variant.
fn parse_registry_endpoint(s: &str) -> Result<RegistryEndpoint, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "advanced" => Ok(RegistryEndpoint::Advanced),
        "legacy" => Ok(RegistryEndpoint::Legacy),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CHDIST_REGISTRY_ENDPOINT".to_string(),
            reason: format!("expected 'advanced' or 'legacy', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
