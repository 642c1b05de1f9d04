//! Configuration for the rate gateway.
//!
//! Environment-variable driven, with serde-backed defaults so the gateway
//! runs with no configuration at all.
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `PROVIDER_TIMEOUT_SECS`: per-provider request timeout (default: 5)
//! - `FREEFOREXAPI_BASE_URL`: pair-keyed quote API base URL
//! - `EXCHANGERATE_API_BASE_URL`: base-currency table API base URL
//! - `FRANKFURTER_BASE_URL`: conversion API base URL

mod providers;
mod server;

pub use providers::ProvidersConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level gateway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream provider settings.
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            providers: ProvidersConfig::from_env(),
        }
    }
}
