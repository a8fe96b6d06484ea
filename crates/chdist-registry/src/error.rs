use thiserror::Error;

/// Errors returned by the Companies House search client.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build registry HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid registry base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("company name must not be empty")]
    EmptyCompanyName,

    /// The selected endpoint cannot apply the requested filter.
    #[error("{endpoint} search does not support the '{filter}' filter")]
    UnsupportedFilter {
        endpoint: chdist_core::RegistryEndpoint,
        filter: &'static str,
    },

    /// Network or TLS failure from the underlying HTTP client.
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
}
