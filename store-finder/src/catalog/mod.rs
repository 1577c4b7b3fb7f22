//! Store catalog.
//!
//! The catalog is the searchable list of stores. It is built once at startup
//! from the store list file: records are sorted by name and each postcode is
//! geocoded in turn. After that it is read-only and shared by reference.

mod error;
mod loader;

use tracing::{info, warn};

use crate::domain::{Store, StoreRecord};
use crate::geocode::Geocoder;
use crate::search::{SearchError, find_stores};

pub use error::CatalogError;
pub use loader::load_store_records;

/// Alphabetically ordered, geocoded stores.
#[derive(Debug, Clone, Default)]
pub struct StoreCatalog {
    stores: Vec<Store>,
}

impl StoreCatalog {
    /// Build the catalog by geocoding every record.
    ///
    /// Lookups run one after another, one per record. A record whose
    /// postcode fails to resolve is kept with an unknown position; radius
    /// searches will never return it.
    pub async fn build<G: Geocoder>(mut records: Vec<StoreRecord>, geocoder: &G) -> Self {
        records.sort_by(|a, b| a.name.cmp(&b.name));

        let mut stores = Vec::with_capacity(records.len());
        for record in records {
            let coordinate = geocoder.lookup(&record.postcode).await;
            if !coordinate.is_known() {
                warn!(
                    store = %record.name,
                    postcode = %record.postcode,
                    "store postcode did not geocode; it will not appear in searches"
                );
            }
            stores.push(record.into_store(coordinate));
        }

        let catalog = Self { stores };
        info!(
            stores = catalog.len(),
            unresolved = catalog.unresolved(),
            "store catalog built"
        );
        catalog
    }

    /// Create a catalog from already geocoded stores (sorted by name).
    pub fn from_stores(mut stores: Vec<Store>) -> Self {
        stores.sort_by(|a, b| a.name().cmp(b.name()));
        Self { stores }
    }

    /// All stores, alphabetical by name.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Number of stores whose postcode could not be geocoded.
    pub fn unresolved(&self) -> usize {
        self.stores
            .iter()
            .filter(|s| !s.coordinate().is_known())
            .count()
    }

    /// Radius search over the whole catalog.
    ///
    /// See [`find_stores`].
    pub async fn find<G: Geocoder>(
        &self,
        geocoder: &G,
        postcode: &str,
        radius_km: f64,
    ) -> Result<Vec<Store>, SearchError> {
        find_stores(geocoder, postcode, radius_km, &self.stores).await
    }
}
