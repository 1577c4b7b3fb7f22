//! Store list loading errors.

use std::path::PathBuf;

/// Errors that can occur when reading the store list file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read store list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON array of `{name, postcode}` records
    #[error("invalid store list {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
