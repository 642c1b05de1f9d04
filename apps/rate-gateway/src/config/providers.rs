//! Upstream quote provider configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by the upstream provider adapters.
///
/// Base URLs are injectable so tests can point the adapters at a local
/// mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL of the pair-keyed quote API.
    #[serde(default = "default_freeforexapi_base_url")]
    pub freeforexapi_base_url: String,
    /// Base URL of the base-currency exchange-rate API.
    #[serde(default = "default_exchangerate_api_base_url")]
    pub exchangerate_api_base_url: String,
    /// Base URL of the base-to-quote conversion API.
    #[serde(default = "default_frankfurter_base_url")]
    pub frankfurter_base_url: String,
    /// Per-provider request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProvidersConfig {
    /// Load provider settings from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            freeforexapi_base_url: std::env::var("FREEFOREXAPI_BASE_URL")
                .unwrap_or(defaults.freeforexapi_base_url),
            exchangerate_api_base_url: std::env::var("EXCHANGERATE_API_BASE_URL")
                .unwrap_or(defaults.exchangerate_api_base_url),
            frankfurter_base_url: std::env::var("FRANKFURTER_BASE_URL")
                .unwrap_or(defaults.frankfurter_base_url),
            timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// The per-provider request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            freeforexapi_base_url: default_freeforexapi_base_url(),
            exchangerate_api_base_url: default_exchangerate_api_base_url(),
            frankfurter_base_url: default_frankfurter_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_freeforexapi_base_url() -> String {
    "https://www.freeforexapi.com".to_string()
}

fn default_exchangerate_api_base_url() -> String {
    "https://api.exchangerate-api.com".to_string()
}

fn default_frankfurter_base_url() -> String {
    "https://api.frankfurter.app".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}
