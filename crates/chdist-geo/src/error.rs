use thiserror::Error;

/// Errors returned by the postcode geocoder.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build geocoder HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("postcode must not be empty")]
    EmptyPostcode,

    /// Network or TLS failure while looking up a postcode.
    #[error("HTTP error geocoding {postcode}: {source}")]
    Http {
        postcode: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON deserialization error geocoding {postcode}: {source}")]
    Deserialize {
        postcode: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response envelope carried a status other than 200.
    #[error("geocoder returned status {status} for {postcode}: {message}")]
    Status {
        postcode: String,
        status: i64,
        message: String,
    },

    #[error("geocoder returned no result for {postcode}")]
    MissingResult { postcode: String },

    #[error("geocoder returned an invalid coordinate for {postcode}: {source}")]
    InvalidCoordinate {
        postcode: String,
        #[source]
        source: chdist_core::CoreError,
    },
}

impl GeocodeError {
    /// The postcode the failed lookup was for, when the failure is tied to one.
    #[must_use]
    pub fn postcode(&self) -> Option<&str> {
        match self {
            Self::Http { postcode, .. }
            | Self::Deserialize { postcode, .. }
            | Self::Status { postcode, .. }
            | Self::MissingResult { postcode }
            | Self::InvalidCoordinate { postcode, .. } => Some(postcode),
            Self::ClientBuild(_) | Self::InvalidBaseUrl { .. } | Self::EmptyPostcode => None,
        }
    }
}
