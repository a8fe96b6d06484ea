//! Distance-annotated company search.
//!
//! Joins a registry search with per-record postcode geocoding and haversine
//! distance from a reference point, preserving registry order.

pub mod aggregator;
pub mod error;
pub mod report;

pub use aggregator::{Aggregator, FailurePolicy};
pub use error::SearchError;
pub use report::{RecordFailure, Report, SearchOutcome, NO_RESULTS_SENTINEL};
