//! Normalization of both search response shapes into [`AddressRecord`].

use chdist_core::{AddressRecord, RegistryEndpoint};

use crate::error::RegistryError;
use crate::types::{
    AdvancedSearchItem, AdvancedSearchResponse, LegacySearchItem, LegacySearchResponse,
};

/// Parses a search response body for `endpoint` into address records, in
/// response order.
///
/// A missing, null, or empty `items` array yields an empty `Vec`.
///
/// # Errors
///
/// Returns [`RegistryError::Deserialize`] if `body` is not JSON of the
/// expected shape. `context` is included in the error message.
pub fn parse_search_body(
    endpoint: RegistryEndpoint,
    body: &str,
    context: &str,
) -> Result<Vec<AddressRecord>, RegistryError> {
    let deserialize_err = |source| RegistryError::Deserialize {
        context: context.to_owned(),
        source,
    };

    let records = match endpoint {
        RegistryEndpoint::Advanced => {
            let response: AdvancedSearchResponse =
                serde_json::from_str(body).map_err(deserialize_err)?;
            response
                .items
                .unwrap_or_default()
                .iter()
                .map(normalize_advanced_item)
                .collect()
        }
        RegistryEndpoint::Legacy => {
            let response: LegacySearchResponse =
                serde_json::from_str(body).map_err(deserialize_err)?;
            response
                .items
                .unwrap_or_default()
                .iter()
                .map(normalize_legacy_item)
                .collect()
        }
    };

    Ok(records)
}

/// Maps an advanced-search hit. Missing address lines become empty strings.
#[must_use]
pub fn normalize_advanced_item(item: &AdvancedSearchItem) -> AddressRecord {
    let address = item.registered_office_address.as_ref();

    AddressRecord {
        display_name: item.company_name.clone(),
        address_line_1: text(address.and_then(|a| a.address_line_1.as_deref())),
        locality: text(address.and_then(|a| a.locality.as_deref())),
        postal_code: text(address.and_then(|a| a.postal_code.as_deref())),
        country: non_blank(address.and_then(|a| a.country.as_deref())),
        region: None,
        premises: None,
    }
}

/// Maps a legacy search hit.
#[must_use]
pub fn normalize_legacy_item(item: &LegacySearchItem) -> AddressRecord {
    let address = item.address.as_ref();

    AddressRecord {
        display_name: item.title.clone(),
        address_line_1: text(address.and_then(|a| a.address_line_1.as_deref())),
        locality: text(address.and_then(|a| a.locality.as_deref())),
        postal_code: text(address.and_then(|a| a.postal_code.as_deref())),
        country: None,
        region: non_blank(address.and_then(|a| a.region.as_deref())),
        premises: non_blank(address.and_then(|a| a.premises.as_deref())),
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
