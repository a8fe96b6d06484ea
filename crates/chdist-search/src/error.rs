use chdist_geo::GeocodeError;
use chdist_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("registry search failed: {0}")]
    Registry(#[from] RegistryError),

    /// A record's postcode could not be resolved; the search was abandoned.
    #[error("failed to geocode postcode '{postcode}': {source}")]
    Geocode {
        postcode: String,
        #[source]
        source: GeocodeError,
    },
}
