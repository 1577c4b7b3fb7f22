//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Store;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Store finder page: search form plus the full catalog.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stores: Vec<StoreView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Search results fragment.
#[derive(Template)]
#[template(path = "store_list.html")]
pub struct StoreListTemplate {
    pub postcode: String,
    pub radius: String,
    pub stores: Vec<StoreView>,
    /// The postcode did not resolve; show feedback instead of results.
    pub invalid_postcode: bool,
    /// The radius was missing or not a number; shown instead of results.
    pub radius_error: Option<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Store view model for templates.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreView {
    pub name: String,
    pub postcode: String,
    pub latitude: String,
    pub longitude: String,
}

impl StoreView {
    /// Create from a domain Store.
    ///
    /// Unknown positions are shown as "unknown" rather than "NaN".
    pub fn from_store(store: &Store) -> Self {
        let coordinate = store.coordinate();
        let (latitude, longitude) = if coordinate.is_known() {
            (
                format!("{:.6}", coordinate.latitude()),
                format!("{:.6}", coordinate.longitude()),
            )
        } else {
            ("unknown".to_string(), "unknown".to_string())
        };

        Self {
            name: store.name().to_string(),
            postcode: store.postcode().to_string(),
            latitude,
            longitude,
        }
    }
}
