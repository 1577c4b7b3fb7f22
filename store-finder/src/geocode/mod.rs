//! Postcode geocoding.
//!
//! Translates a UK postcode into a [`Coordinate`] using postcodes.io.
//! Every failure (blank input, unknown postcode, network trouble, a body
//! that isn't the expected JSON) comes back from [`Geocoder::lookup`] as
//! [`Coordinate::UNKNOWN`] rather than an error.

mod client;
mod error;
mod fixed;
mod types;

use std::future::Future;

use crate::domain::Coordinate;

pub use client::{GeocoderClient, GeocoderConfig};
pub use error::GeocodeError;
pub use fixed::FixedGeocoder;
pub use types::{PostcodeResponse, PostcodeResult};

/// Something that can resolve a postcode to a position.
///
/// Implemented by [`GeocoderClient`] for the live API and by
/// [`FixedGeocoder`] for fixtures.
pub trait Geocoder {
    /// Resolve `postcode`, returning [`Coordinate::UNKNOWN`] on any failure.
    fn lookup(&self, postcode: &str) -> impl Future<Output = Coordinate> + Send;
}
