//! HTTP client for the Companies House company search API.
//!
//! Wraps `reqwest` with the registry's authentication convention (the API key
//! as the Basic-auth username with an empty password), query construction for
//! both search endpoints, and a single response-parsing path shared by them.

use std::time::Duration;

use chdist_core::{AddressRecord, RegistryEndpoint, SearchQuery};
use reqwest::{Client, Url};

use crate::error::RegistryError;
use crate::normalize::parse_search_body;

const DEFAULT_BASE_URL: &str = "https://api.company-information.service.gov.uk/";

/// Only active companies are of interest to distance searches.
const COMPANY_STATUS_FILTER: &str = "active";

/// Client for Companies House company searches.
///
/// Holds the HTTP client, API key, base URL and which search endpoint to use.
/// Use [`RegistryClient::new`] for production or
/// [`RegistryClient::with_base_url`] to point at a mock server in tests.
pub struct RegistryClient {
    client: Client,
    api_key: String,
    base_url: Url,
    endpoint: RegistryEndpoint,
}

impl RegistryClient {
    /// Creates a client pointed at the production Companies House API using
    /// the advanced search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ClientBuild`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, RegistryError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ClientBuild`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`RegistryError::InvalidBaseUrl`] if `base_url` is not a valid
    /// hierarchical URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(RegistryError::ClientBuild)?;

        // Normalise to exactly one trailing slash so endpoint paths append
        // rather than replace the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| RegistryError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(RegistryError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            endpoint: RegistryEndpoint::Advanced,
        })
    }

    /// Switches the search endpoint this client queries.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: RegistryEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> RegistryEndpoint {
        self.endpoint
    }

    /// Searches for companies whose name contains `name`, optionally narrowed
    /// by a free-text `location`.
    ///
    /// Returns records in the order the registry returned them. An empty
    /// result set is `Ok(vec![])`, not an error.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyCompanyName`] if `name` is blank.
    /// - [`RegistryError::UnsupportedFilter`] if `location` is set on the
    ///   legacy endpoint.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::UnexpectedStatus`] on a non-2xx response.
    /// - [`RegistryError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search(
        &self,
        name: &str,
        location: Option<&str>,
    ) -> Result<Vec<AddressRecord>, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyCompanyName);
        }
        let location = location.map(str::trim).filter(|s| !s.is_empty());

        let url = self.search_url(name, location)?;
        tracing::debug!(
            company_name = name,
            location = location.unwrap_or_default(),
            endpoint = %self.endpoint,
            "searching company registry"
        );

        let body = self.request_body(&url).await?;
        let context = format!("{} search(company_name={name})", self.endpoint);
        let records = parse_search_body(self.endpoint, &body, &context)?;

        tracing::debug!(
            company_name = name,
            count = records.len(),
            "registry search complete"
        );
        Ok(records)
    }

    /// Runs [`RegistryClient::search`] with the name and filter carried by
    /// `query`.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::search`].
    pub async fn search_query(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<AddressRecord>, RegistryError> {
        self.search(query.name(), query.location_filter()).await
    }

    /// Builds the search URL for the configured endpoint with properly
    /// percent-encoded query parameters.
    fn search_url(&self, name: &str, location: Option<&str>) -> Result<Url, RegistryError> {
        let mut url = self.base_url.clone();

        match self.endpoint {
            RegistryEndpoint::Advanced => {
                url.set_path(&format!("{}advanced-search/companies", self.base_url.path()));
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("company_name_includes", name);
                pairs.append_pair("company_status", COMPANY_STATUS_FILTER);
                if let Some(location) = location {
                    pairs.append_pair("location", location);
                }
            }
            RegistryEndpoint::Legacy => {
                if location.is_some() {
                    return Err(RegistryError::UnsupportedFilter {
                        endpoint: self.endpoint,
                        filter: "location",
                    });
                }
                url.set_path(&format!("{}search/companies", self.base_url.path()));
                url.query_pairs_mut().append_pair("q", name);
            }
        }

        Ok(url)
    }

    /// Sends an authenticated GET, asserts a 2xx status, and returns the body.
    async fn request_body(&self, url: &Url) -> Result<String, RegistryError> {
        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
