//! `search` command handler.

use chdist_core::{AppConfig, SearchQuery};
use chdist_geo::GeocoderClient;
use chdist_registry::RegistryClient;
use chdist_search::{Aggregator, FailurePolicy, SearchOutcome};

#[derive(Debug, Default)]
pub(crate) struct SearchOptions {
    pub(crate) location: Option<String>,
    pub(crate) nearest_first: bool,
    pub(crate) keep_going: bool,
}

/// Run one distance search per name and print `"{name}, {report}"` for each.
///
/// A failure for one name is logged and the loop moves on to the next.
///
/// # Errors
///
/// Returns an error only if the HTTP clients cannot be built.
pub(crate) async fn run_search(
    config: &AppConfig,
    names: &[String],
    options: &SearchOptions,
) -> anyhow::Result<()> {
    let aggregator = build_aggregator(config, options)?;

    for name in names {
        let query = match SearchQuery::new(name, options.location.as_deref(), config.reference) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!(company_name = %name, error = %e, "skipping invalid search");
                continue;
            }
        };

        match aggregator.search(&query).await {
            Ok(outcome) => print_outcome(name, outcome, options.nearest_first),
            Err(e) => {
                tracing::error!(company_name = %name, error = %e, "search failed");
                eprintln!("Error getting address for company {name}: {e}");
            }
        }
    }

    Ok(())
}

fn build_aggregator(config: &AppConfig, options: &SearchOptions) -> anyhow::Result<Aggregator> {
    let registry = RegistryClient::with_base_url(
        &config.api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.registry_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build registry client: {e}"))?
    .with_endpoint(config.registry_endpoint);

    let geocoder = GeocoderClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocoder_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build geocoder client: {e}"))?;

    let policy = if options.keep_going {
        FailurePolicy::Collect
    } else {
        FailurePolicy::FailFast
    };

    Ok(Aggregator::new(registry, geocoder).with_policy(policy))
}

fn print_outcome(name: &str, outcome: SearchOutcome, nearest_first: bool) {
    let outcome = match outcome {
        SearchOutcome::Found(report) if nearest_first => {
            SearchOutcome::Found(report.sorted_by_distance())
        }
        other => other,
    };

    println!("{name}, {}", outcome.render());

    if let SearchOutcome::Found(report) = &outcome {
        for failure in report.failures() {
            eprintln!(
                "  skipped {} ({}): {}",
                failure.record.display_name, failure.record.postal_code, failure.error
            );
        }
    }
}
