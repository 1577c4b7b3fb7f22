//! In-memory geocoder for development and tests.
//!
//! Answers from a fixed postcode table instead of calling postcodes.io.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Coordinate;

use super::Geocoder;

/// Geocoder backed by a fixed postcode → coordinate table.
///
/// Postcodes missing from the table resolve to [`Coordinate::UNKNOWN`], as an
/// unknown postcode would from the live API. Lookups are counted so tests can
/// check how many requests a real client would have made.
#[derive(Debug, Default)]
pub struct FixedGeocoder {
    positions: HashMap<String, Coordinate>,
    lookups: AtomicUsize,
}

impl FixedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a postcode to the table.
    pub fn with(mut self, postcode: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.positions
            .insert(postcode.into(), Coordinate::new(latitude, longitude));
        self
    }

    /// Number of lookups made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl Geocoder for FixedGeocoder {
    async fn lookup(&self, postcode: &str) -> Coordinate {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.positions
            .get(postcode)
            .copied()
            .unwrap_or(Coordinate::UNKNOWN)
    }
}
