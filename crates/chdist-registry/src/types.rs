//! Companies House search response types.
//!
//! Two endpoints return two shapes. `/advanced-search/companies` nests the
//! address under `registered_office_address`; the older `/search/companies`
//! uses `title` plus an `address` block with `premises` and `region`. Every
//! field is optional on the wire, and `items` is omitted entirely when a
//! search matches nothing.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// advanced-search/companies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AdvancedSearchResponse {
    #[serde(default)]
    pub items: Option<Vec<AdvancedSearchItem>>,
    #[serde(default)]
    pub hits: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AdvancedSearchItem {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_number: Option<String>,
    #[serde(default)]
    pub registered_office_address: Option<RegisteredOfficeAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisteredOfficeAddress {
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

// ---------------------------------------------------------------------------
// search/companies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LegacySearchResponse {
    #[serde(default)]
    pub items: Option<Vec<LegacySearchItem>>,
    #[serde(default)]
    pub total_results: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LegacySearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: Option<LegacyAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LegacyAddress {
    /// Building name or number.
    #[serde(default)]
    pub premises: Option<String>,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}
