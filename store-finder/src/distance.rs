//! Great-circle distance using the haversine formula.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometres between two points given in degrees, rounded to
/// two decimal places.
///
/// NaN in any input yields NaN. Callers rely on this: an unknown store
/// position produces a NaN distance, which never passes a radius check.
///
/// # Examples
///
/// ```
/// use store_finder::distance::distance_km;
///
/// // Battersea to Bognor Regis
/// let d = distance_km(51.469643, -0.176429, 50.798685, -0.667151);
/// assert_eq!(d, 82.09);
///
/// assert!(distance_km(f64::NAN, f64::NAN, 50.8, -0.67).is_nan());
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lat_diff = (lat2 - lat1).to_radians();
    let lon_diff = (lon2 - lon1).to_radians();

    let a = (lat_diff / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (lon_diff / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to_hundredths(EARTH_RADIUS_KM * c)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
