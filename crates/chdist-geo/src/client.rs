//! HTTP client for the postcodes.io lookup API.
//!
//! Resolves a single postcode to a [`Coordinate`]. Success is decided by the
//! `status` field in the JSON envelope rather than the HTTP status line, so a
//! 404 body such as `{"status": 404, "error": "Invalid postcode"}` surfaces
//! as [`GeocodeError::Status`] with the service's message.

use std::time::Duration;

use chdist_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{PostcodeResponse, STATUS_OK};

const DEFAULT_BASE_URL: &str = "https://api.postcodes.io/";

/// Client for postcode-to-coordinate lookups.
///
/// Use [`GeocoderClient::new`] for production or
/// [`GeocoderClient::with_base_url`] to point at a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    base_url: Url,
}

impl GeocoderClient {
    /// Creates a client pointed at the public postcodes.io API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::ClientBuild`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::ClientBuild`] if the HTTP client cannot be
    /// constructed, or [`GeocodeError::InvalidBaseUrl`] if `base_url` does not
    /// parse as a hierarchical URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(GeocodeError::ClientBuild)?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Looks up a postcode and returns its coordinate.
    ///
    /// The postcode is trimmed but otherwise passed through unvalidated.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::EmptyPostcode`] if `postcode` is blank (no request is made).
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON envelope.
    /// - [`GeocodeError::Status`] if the envelope status is not 200.
    /// - [`GeocodeError::MissingResult`] if a 200 envelope has no result.
    /// - [`GeocodeError::InvalidCoordinate`] if the returned point is out of range.
    pub async fn resolve(&self, postcode: &str) -> Result<Coordinate, GeocodeError> {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            return Err(GeocodeError::EmptyPostcode);
        }

        let url = self.lookup_url(postcode)?;
        tracing::debug!(postcode, %url, "resolving postcode");

        let http_err = |source| GeocodeError::Http {
            postcode: postcode.to_owned(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(http_err)?;
        let body = response.text().await.map_err(http_err)?;

        let envelope: PostcodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                postcode: postcode.to_owned(),
                source: e,
            })?;

        coordinate_from_envelope(postcode, envelope)
    }

    /// Builds `{base}/postcodes/{postcode}` with the postcode percent-encoded
    /// as a single path segment.
    fn lookup_url(&self, postcode: &str) -> Result<Url, GeocodeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .push("postcodes")
            .push(postcode);
        Ok(url)
    }
}

/// Checks the envelope status and converts the result into a validated
/// [`Coordinate`].
fn coordinate_from_envelope(
    postcode: &str,
    envelope: PostcodeResponse,
) -> Result<Coordinate, GeocodeError> {
    if envelope.status != STATUS_OK {
        return Err(GeocodeError::Status {
            postcode: postcode.to_owned(),
            status: envelope.status,
            message: envelope
                .error
                .unwrap_or_else(|| "unknown error".to_owned()),
        });
    }

    let result = envelope.result.ok_or_else(|| GeocodeError::MissingResult {
        postcode: postcode.to_owned(),
    })?;

    Coordinate::new(result.latitude, result.longitude).map_err(|e| {
        GeocodeError::InvalidCoordinate {
            postcode: postcode.to_owned(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostcodeResult;

    fn test_client(base_url: &str) -> GeocoderClient {
        GeocoderClient::with_base_url(30, "chdist-test/0.1", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn lookup_url_appends_postcode_segment() {
        let client = test_client("https://api.postcodes.io");
        let url = client.lookup_url("SW1A1AA").unwrap();
        assert_eq!(url.as_str(), "https://api.postcodes.io/postcodes/SW1A1AA");
    }

    #[test]
    fn lookup_url_strips_trailing_slash() {
        let client = test_client("https://api.postcodes.io/");
        let url = client.lookup_url("EH1 1YZ").unwrap();
        assert_eq!(url.as_str(), "https://api.postcodes.io/postcodes/EH1%201YZ");
    }

    #[test]
    fn lookup_url_encodes_slashes_inside_postcode() {
        let client = test_client("https://api.postcodes.io");
        let url = client.lookup_url("AB1/2CD").unwrap();
        assert_eq!(url.as_str(), "https://api.postcodes.io/postcodes/AB1%2F2CD");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = GeocoderClient::with_base_url(30, "ua", "not a url");
        assert!(matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn envelope_with_ok_status_yields_coordinate() {
        let envelope = PostcodeResponse {
            status: 200,
            result: Some(PostcodeResult {
                latitude: 51.5007,
                longitude: -0.1246,
            }),
            error: None,
        };
        let coord = coordinate_from_envelope("SW1A 1AA", envelope).unwrap();
        assert!((coord.latitude() - 51.5007).abs() < f64::EPSILON);
        assert!((coord.longitude() - -0.1246).abs() < f64::EPSILON);
    }

    #[test]
    fn envelope_with_error_status_carries_message() {
        let envelope = PostcodeResponse {
            status: 404,
            result: None,
            error: Some("Postcode not found".to_owned()),
        };
        let err = coordinate_from_envelope("ZZ9 9ZZ", envelope).unwrap_err();
        assert!(matches!(
            err,
            GeocodeError::Status { ref postcode, status: 404, ref message }
                if postcode == "ZZ9 9ZZ" && message == "Postcode not found"
        ));
    }

    #[test]
    fn envelope_without_result_is_missing_result() {
        let envelope = PostcodeResponse {
            status: 200,
            result: None,
            error: None,
        };
        let err = coordinate_from_envelope("SW1A 1AA", envelope).unwrap_err();
        assert!(matches!(err, GeocodeError::MissingResult { .. }));
    }

    #[test]
    fn envelope_with_out_of_range_point_is_rejected() {
        let envelope = PostcodeResponse {
            status: 200,
            result: Some(PostcodeResult {
                latitude: 123.0,
                longitude: 0.0,
            }),
            error: None,
        };
        let err = coordinate_from_envelope("SW1A 1AA", envelope).unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidCoordinate { .. }));
        assert_eq!(err.postcode(), Some("SW1A 1AA"));
    }
}
