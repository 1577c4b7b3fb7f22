//! Store records.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A raw store entry as listed in the store file, before geocoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreRecord {
    pub name: String,
    pub postcode: String,
}

impl StoreRecord {
    pub fn new(name: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            postcode: postcode.into(),
        }
    }

    /// Augment this record with its geocoded position.
    pub fn into_store(self, coordinate: Coordinate) -> Store {
        Store {
            name: self.name,
            postcode: self.postcode,
            coordinate,
        }
    }
}

/// A geocoded store.
///
/// Stores are immutable once built; searches hand out clones rather than
/// editing catalog entries. Serializes flat as
/// `{name, postcode, latitude, longitude}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    name: String,
    postcode: String,
    #[serde(flatten)]
    coordinate: Coordinate,
}

impl Store {
    pub fn new(
        name: impl Into<String>,
        postcode: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        StoreRecord::new(name, postcode).into_store(coordinate)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }
}
