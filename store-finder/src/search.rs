//! Radius search.
//!
//! Geocodes the target postcode once, keeps the stores strictly closer than
//! the radius, and orders them north to south.

use tracing::debug;

use crate::domain::{Coordinate, Store};
use crate::geocode::Geocoder;

/// Errors from a radius search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The target postcode did not resolve to a position.
    ///
    /// Distinct from an empty result: the caller should show this to the
    /// user as feedback, not as "no stores found".
    #[error("invalid postcode: {postcode}")]
    InvalidPostcode { postcode: String },
}

/// Find the stores within `radius_km` of `postcode`, north-most first.
///
/// Makes exactly one geocoder lookup. Fails with
/// [`SearchError::InvalidPostcode`] if the postcode cannot be resolved.
pub async fn find_stores<G: Geocoder>(
    geocoder: &G,
    postcode: &str,
    radius_km: f64,
    stores: &[Store],
) -> Result<Vec<Store>, SearchError> {
    let origin = geocoder.lookup(postcode).await;
    if !origin.is_known() {
        return Err(SearchError::InvalidPostcode {
            postcode: postcode.to_string(),
        });
    }

    let found = stores_within(origin, radius_km, stores);
    debug!(
        postcode,
        radius_km,
        searched = stores.len(),
        found = found.len(),
        "radius search"
    );
    Ok(found)
}

/// Stores strictly closer than `radius_km` to `origin`, sorted by
/// descending latitude.
///
/// A store exactly on the radius is excluded. Stores with an unknown
/// position have a NaN distance, which never compares less than the radius,
/// so they drop out here without special handling. Equal latitudes keep
/// their input order.
pub fn stores_within(origin: Coordinate, radius_km: f64, stores: &[Store]) -> Vec<Store> {
    let mut found: Vec<Store> = stores
        .iter()
        .filter(|store| origin.distance_to(&store.coordinate()) < radius_km)
        .cloned()
        .collect();

    // Every kept store has a known latitude, so total_cmp orders real values only.
    found.sort_by(|a, b| b.latitude().total_cmp(&a.latitude()));
    found
}
