//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Store;

/// Query string for `GET /stores/search`.
///
/// Both fields arrive as raw strings so that a missing or malformed value
/// becomes our own error response rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SearchStoresQuery {
    /// UK postcode to search around
    pub postcode: Option<String>,

    /// Search radius in kilometres
    pub radius: Option<String>,
}

/// JSON body for `POST /api/stores/search`.
///
/// Fields are read as raw JSON values and validated by the handler, so a
/// wrong type gets the same error body as on the query-string route.
#[derive(Debug, Deserialize)]
pub struct SearchStoresRequest {
    /// Anything other than a JSON string is an invalid postcode.
    #[serde(default)]
    pub postcode: serde_json::Value,

    /// Search radius in kilometres; must be a JSON number.
    #[serde(default)]
    pub radius: serde_json::Value,
}

/// Response for store search.
#[derive(Debug, Serialize)]
pub struct SearchStoresResponse {
    /// Matching stores, north to south
    pub stores: Vec<Store>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
