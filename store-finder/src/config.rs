//! Application configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the store finder server.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to listen on (`STORE_FINDER_ADDR`).
    pub addr: SocketAddr,

    /// Path to the JSON store list (`STORES_FILE`).
    pub stores_file: PathBuf,

    /// Base URL of the postcode lookup API (`POSTCODES_API_URL`).
    pub postcodes_api_url: String,

    /// Geocoder request timeout in seconds (`GEOCODER_TIMEOUT_SECS`).
    pub geocoder_timeout_secs: u64,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("STORE_FINDER_ADDR") {
            config.addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: "STORE_FINDER_ADDR",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("STORES_FILE") {
            config.stores_file = PathBuf::from(value);
        }

        if let Some(value) = lookup("POSTCODES_API_URL") {
            config.postcodes_api_url = value;
        }

        if let Some(value) = lookup("GEOCODER_TIMEOUT_SECS") {
            config.geocoder_timeout_secs = value.parse().map_err(|_| ConfigError::Invalid {
                var: "GEOCODER_TIMEOUT_SECS",
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            stores_file: PathBuf::from("data/stores.json"),
            postcodes_api_url: "http://api.postcodes.io".to_string(),
            geocoder_timeout_secs: 30,
        }
    }
}
