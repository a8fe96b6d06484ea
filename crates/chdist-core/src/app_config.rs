use crate::types::Coordinate;

pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://api.company-information.service.gov.uk";
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.postcodes.io";

/// Which Companies House search endpoint the registry client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryEndpoint {
    /// `/advanced-search/companies` with name, status and location filters.
    #[default]
    Advanced,
    /// `/search/companies?q=` returning the older `title`/`address` shape.
    /// Does not support location filtering.
    Legacy,
}

impl std::fmt::Display for RegistryEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEndpoint::Advanced => write!(f, "advanced"),
            RegistryEndpoint::Legacy => write!(f, "legacy"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub reference: Coordinate,
    pub location_filter: Option<String>,
    pub registry_base_url: String,
    pub registry_endpoint: RegistryEndpoint,
    pub geocoder_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("reference", &self.reference)
            .field("location_filter", &self.location_filter)
            .field("registry_base_url", &self.registry_base_url)
            .field("registry_endpoint", &self.registry_endpoint)
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
