//! postcodes.io response types.
//!
//! Only the fields the finder reads are modelled; the rest of the payload
//! (admin districts, codes, eastings...) is ignored by serde.

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Envelope returned by `GET /postcodes/{postcode}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    pub status: u16,
    pub result: Option<PostcodeResult>,
    pub error: Option<String>,
}

/// The `result` object of a successful lookup.
///
/// postcodes.io reports `null` coordinates for some postcodes it knows but
/// cannot place, so both are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResult {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PostcodeResponse {
    /// Extract the coordinate from the response.
    ///
    /// Succeeds only for a body status of 200 carrying both coordinates.
    pub fn into_coordinate(self) -> Result<Coordinate, GeocodeError> {
        if self.status != 200 {
            return Err(GeocodeError::Api {
                status: self.status,
                message: self.error.unwrap_or_default(),
            });
        }

        let result = self.result.ok_or(GeocodeError::MissingCoordinates)?;
        match (result.latitude, result.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
            _ => Err(GeocodeError::MissingCoordinates),
        }
    }
}
