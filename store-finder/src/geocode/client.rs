//! postcodes.io HTTP client.

use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

use crate::domain::Coordinate;

use super::Geocoder;
use super::error::GeocodeError;
use super::types::PostcodeResponse;

/// Default base URL for the postcodes.io API.
const DEFAULT_BASE_URL: &str = "http://api.postcodes.io";

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the postcodes.io lookup endpoint.
///
/// Each lookup is a single request; nothing is cached.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocoderClient {
    /// Create a new geocoder client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The lookup URL for a postcode.
    ///
    /// The postcode becomes a single percent-encoded path segment, so
    /// `"KT1 3PB"` is requested as `/postcodes/KT1%203PB`.
    pub fn postcode_url(&self, postcode: &str) -> String {
        format!(
            "{}/postcodes/{}",
            self.base_url,
            utf8_percent_encode(postcode, NON_ALPHANUMERIC)
        )
    }

    /// Look up a postcode, reporting why it failed.
    ///
    /// The body is parsed whatever the HTTP status: postcodes.io reports
    /// unknown postcodes as a JSON body with a non-200 `status`.
    pub async fn try_lookup(&self, postcode: &str) -> Result<Coordinate, GeocodeError> {
        if postcode.trim().is_empty() {
            return Err(GeocodeError::BlankPostcode);
        }

        let url = self.postcode_url(postcode);
        let response = self.http.get(&url).send().await?;
        let http_status = response.status();
        let body = response.text().await?;

        let parsed: PostcodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                http_status: http_status.as_u16(),
                message: e.to_string(),
            })?;

        parsed.into_coordinate()
    }
}

impl Geocoder for GeocoderClient {
    async fn lookup(&self, postcode: &str) -> Coordinate {
        match self.try_lookup(postcode).await {
            Ok(coordinate) => {
                debug!(
                    postcode,
                    latitude = coordinate.latitude(),
                    longitude = coordinate.longitude(),
                    "postcode resolved"
                );
                coordinate
            }
            Err(e) => {
                warn!(postcode, error = %e, "postcode lookup failed");
                Coordinate::UNKNOWN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeocoderConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = GeocoderConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn url_encodes_spaces() {
        let client = GeocoderClient::new(GeocoderConfig::new()).unwrap();
        assert_eq!(
            client.postcode_url("KT1 3PB"),
            "http://api.postcodes.io/postcodes/KT1%203PB"
        );
    }

    #[test]
    fn url_keeps_postcode_in_one_segment() {
        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url("http://localhost:9/")).unwrap();
        assert_eq!(
            client.postcode_url("../admin?x"),
            "http://localhost:9/postcodes/%2E%2E%2Fadmin%3Fx"
        );
    }

    #[tokio::test]
    async fn blank_postcode_fails_without_request() {
        // Port 9 (discard) is never contacted: blank input short-circuits.
        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url("http://127.0.0.1:9")).unwrap();

        assert!(matches!(
            client.try_lookup("   ").await,
            Err(GeocodeError::BlankPostcode)
        ));
        assert!(!client.lookup("").await.is_known());
    }
}
