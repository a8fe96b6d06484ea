//! Search results and their text rendering.

use std::fmt::Write as _;

use chdist_core::{AddressRecord, AnnotatedRecord};
use chdist_geo::GeocodeError;

/// Rendered in place of a report when the registry had no matches.
pub const NO_RESULTS_SENTINEL: &str = "Address not found";

/// Outcome of a search that did not fail.
///
/// `NoResults` is a normal outcome and is kept apart from errors so callers
/// can tell "nothing matched" from "a lookup failed".
#[derive(Debug)]
pub enum SearchOutcome {
    NoResults,
    Found(Report),
}

impl SearchOutcome {
    /// The report text, or [`NO_RESULTS_SENTINEL`].
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            SearchOutcome::NoResults => NO_RESULTS_SENTINEL.to_string(),
            SearchOutcome::Found(report) => report.render(),
        }
    }
}

/// A record whose postcode failed to resolve under the collecting policy.
#[derive(Debug)]
pub struct RecordFailure {
    pub record: AddressRecord,
    pub error: GeocodeError,
}

/// Annotated records in registry order, plus any collected failures.
#[derive(Debug, Default)]
pub struct Report {
    records: Vec<AnnotatedRecord>,
    failures: Vec<RecordFailure>,
}

impl Report {
    #[must_use]
    pub fn new(records: Vec<AnnotatedRecord>, failures: Vec<RecordFailure>) -> Self {
        Self { records, failures }
    }

    #[must_use]
    pub fn records(&self) -> &[AnnotatedRecord] {
        &self.records
    }

    /// Records skipped because geocoding failed. Always empty under
    /// fail-fast.
    #[must_use]
    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }

    #[must_use]
    pub fn into_records(self) -> Vec<AnnotatedRecord> {
        self.records
    }

    /// Reorders records nearest first. Ties keep registry order.
    #[must_use]
    pub fn sorted_by_distance(mut self) -> Self {
        self.records
            .sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        self
    }

    /// One line per record:
    /// `name, address_line_1, locality, postal_code, distance_km`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for annotated in &self.records {
            let r = &annotated.record;
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{}, {}, {}, {}, {:.6}",
                r.display_name, r.address_line_1, r.locality, r.postal_code, annotated.distance_km
            );
        }
        out
    }
}
