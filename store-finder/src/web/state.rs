//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StoreCatalog;
use crate::geocode::{Geocoder, GeocoderClient};

/// Shared application state.
///
/// Generic over the geocoder so the router can be exercised against a
/// fixture table; the server uses [`GeocoderClient`].
pub struct AppState<G = GeocoderClient> {
    /// Postcode geocoder used for each search
    pub geocoder: Arc<G>,

    /// Store catalog, built once at startup
    pub catalog: Arc<StoreCatalog>,
}

impl<G: Geocoder> AppState<G> {
    /// Create a new app state.
    pub fn new(geocoder: G, catalog: StoreCatalog) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            catalog: Arc::new(catalog),
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            geocoder: Arc::clone(&self.geocoder),
            catalog: Arc::clone(&self.catalog),
        }
    }
}
