//! Postcode geocoding and great-circle distance.

pub mod client;
pub mod distance;
pub mod error;
pub mod types;

pub use client::GeocoderClient;
pub use distance::{haversine_km, EARTH_RADIUS_KM};
pub use error::GeocodeError;
pub use types::{PostcodeResponse, PostcodeResult, STATUS_OK};
