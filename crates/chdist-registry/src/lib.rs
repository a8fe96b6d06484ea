//! Companies House company search client.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use chdist_core::RegistryEndpoint;
pub use client::RegistryClient;
pub use error::RegistryError;
pub use normalize::{normalize_advanced_item, normalize_legacy_item, parse_search_body};
pub use types::{AdvancedSearchResponse, LegacySearchResponse};
