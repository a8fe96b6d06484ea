//! postcodes.io response types.

use serde::Deserialize;

/// Envelope status the postcode service uses for a successful lookup.
pub const STATUS_OK: i64 = 200;

/// Top-level envelope for `GET /postcodes/{postcode}`.
///
/// Failed lookups still return this envelope with a non-200 `status`, a
/// null `result`, and an `error` message.
#[derive(Debug, Deserialize)]
pub struct PostcodeResponse {
    pub status: i64,
    #[serde(default)]
    pub result: Option<PostcodeResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostcodeResult {
    pub latitude: f64,
    pub longitude: f64,
}
