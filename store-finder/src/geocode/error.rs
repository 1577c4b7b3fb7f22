//! Geocoding error types.

/// Reasons a postcode lookup can fail.
///
/// [`Geocoder::lookup`](super::Geocoder::lookup) collapses all of these into
/// [`Coordinate::UNKNOWN`](crate::domain::Coordinate::UNKNOWN);
/// [`GeocoderClient::try_lookup`](super::GeocoderClient::try_lookup) keeps
/// them apart.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The postcode was empty or only whitespace; no request was made.
    #[error("postcode is blank")]
    BlankPostcode,

    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200 status in its body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error (HTTP {http_status}): {message}")]
    Json { http_status: u16, message: String },

    /// A 200 response without a usable latitude/longitude
    #[error("response has no coordinates")]
    MissingCoordinates,
}
