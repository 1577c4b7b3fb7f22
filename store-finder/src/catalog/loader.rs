//! Store list file loading.

use std::path::Path;

use crate::domain::StoreRecord;

use super::error::CatalogError;

/// Read the raw store records from a JSON file.
///
/// The file holds an array of `{"name": ..., "postcode": ...}` objects.
/// Records are returned in file order; sorting happens when the catalog is
/// built.
pub fn load_store_records(path: impl AsRef<Path>) -> Result<Vec<StoreRecord>, CatalogError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}
