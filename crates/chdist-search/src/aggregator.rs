//! Search orchestration: registry lookup, then per-record geocoding and
//! distance, strictly one record at a time.

use chdist_core::{AnnotatedRecord, SearchQuery};
use chdist_geo::{haversine_km, GeocoderClient};
use chdist_registry::RegistryClient;

use crate::error::SearchError;
use crate::report::{RecordFailure, Report, SearchOutcome};

/// What to do when a record's postcode cannot be geocoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole search on the first failure. No partial report.
    #[default]
    FailFast,
    /// Skip the failed record, keep going, and list it in
    /// [`Report::failures`].
    Collect,
}

pub struct Aggregator {
    registry: RegistryClient,
    geocoder: GeocoderClient,
    policy: FailurePolicy,
}

impl Aggregator {
    #[must_use]
    pub fn new(registry: RegistryClient, geocoder: GeocoderClient) -> Self {
        Self {
            registry,
            geocoder,
            policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run one search and annotate every hit with its distance from
    /// `query.reference()`.
    ///
    /// Records keep the registry's response order; nothing is sorted.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Registry`] if the registry search fails.
    /// - [`SearchError::Geocode`] on the first postcode that fails to resolve
    ///   when the policy is [`FailurePolicy::FailFast`].
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        let records = self.registry.search_query(query).await?;

        if records.is_empty() {
            tracing::info!(company_name = query.name(), "no matching companies");
            return Ok(SearchOutcome::NoResults);
        }

        let reference = query.reference();
        let mut annotated = Vec::with_capacity(records.len());
        let mut failures = Vec::new();

        for record in records {
            match self.geocoder.resolve(&record.postal_code).await {
                Ok(coordinate) => {
                    let distance_km = haversine_km(reference, coordinate);
                    tracing::debug!(
                        company = %record.display_name,
                        postcode = %record.postal_code,
                        distance_km,
                        "annotated record"
                    );
                    annotated.push(AnnotatedRecord {
                        record,
                        coordinate,
                        distance_km,
                    });
                }
                Err(error) => match self.policy {
                    FailurePolicy::FailFast => {
                        return Err(SearchError::Geocode {
                            postcode: record.postal_code,
                            source: error,
                        });
                    }
                    FailurePolicy::Collect => {
                        tracing::warn!(
                            company = %record.display_name,
                            postcode = %record.postal_code,
                            error = %error,
                            "skipping record; postcode failed to geocode"
                        );
                        failures.push(RecordFailure { record, error });
                    }
                },
            }
        }

        tracing::info!(
            company_name = query.name(),
            annotated = annotated.len(),
            failed = failures.len(),
            "search complete"
        );
        Ok(SearchOutcome::Found(Report::new(annotated, failures)))
    }

    /// Run [`Aggregator::search`] and render the outcome as text, with
    /// [`crate::NO_RESULTS_SENTINEL`] standing in for an empty result.
    ///
    /// # Errors
    ///
    /// See [`Aggregator::search`].
    pub async fn build_report(&self, query: &SearchQuery) -> Result<String, SearchError> {
        Ok(self.search(query).await?.render())
    }
}
