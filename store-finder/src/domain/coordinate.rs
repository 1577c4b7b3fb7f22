//! Geographic coordinates.

use serde::Serialize;

use crate::distance::distance_km;

/// A latitude/longitude pair in degrees.
///
/// A coordinate is either fully known or fully unknown: construction through
/// [`Coordinate::new`] collapses any pair with a NaN component into
/// [`Coordinate::UNKNOWN`], so a half-resolved position cannot exist.
///
/// # Examples
///
/// ```
/// use store_finder::domain::Coordinate;
///
/// let kingston = Coordinate::new(51.40605, -0.281429);
/// assert!(kingston.is_known());
///
/// let half = Coordinate::new(51.40605, f64::NAN);
/// assert!(!half.is_known());
/// assert!(half.latitude().is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// The unknown position: both components are NaN.
    pub const UNKNOWN: Coordinate = Coordinate {
        latitude: f64::NAN,
        longitude: f64::NAN,
    };

    /// Create a coordinate, collapsing to [`Coordinate::UNKNOWN`] if either
    /// component is NaN.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        if latitude.is_nan() || longitude.is_nan() {
            Self::UNKNOWN
        } else {
            Self {
                latitude,
                longitude,
            }
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether this coordinate holds a real position.
    pub fn is_known(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }

    /// Great-circle distance to `other` in kilometres, rounded to 2 dp.
    ///
    /// NaN if either coordinate is unknown.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
