pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::{AppConfig, RegistryEndpoint};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{AddressRecord, AnnotatedRecord, Coordinate, SearchQuery};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("company name must not be empty")]
    EmptyCompanyName,

    #[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
