//! Domain types shared by the registry, geocoding and search crates.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A validated WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is NaN/infinite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let invalid = |reason| CoreError::InvalidCoordinate {
            latitude,
            longitude,
            reason,
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A single company search: name substring, optional location filter, and
/// the point distances are measured from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    name: String,
    location_filter: Option<String>,
    reference: Coordinate,
}

impl SearchQuery {
    /// Builds a query. Surrounding whitespace is trimmed from both strings and
    /// a blank location filter is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyCompanyName`] if `name` is blank.
    pub fn new(
        name: &str,
        location_filter: Option<&str>,
        reference: Coordinate,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyCompanyName);
        }

        let location_filter = location_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Ok(Self {
            name: name.to_owned(),
            location_filter,
            reference,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location_filter(&self) -> Option<&str> {
        self.location_filter.as_deref()
    }

    #[must_use]
    pub fn reference(&self) -> Coordinate {
        self.reference
    }
}

/// A company hit from the registry, normalised across response shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub display_name: String,
    pub address_line_1: String,
    pub locality: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub region: Option<String>,
    /// Building name or number; only the legacy search shape carries it.
    pub premises: Option<String>,
}

/// An [`AddressRecord`] with its resolved coordinate and distance from the
/// query's reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRecord {
    pub record: AddressRecord,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}
