//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for the HTTP API.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl ServerConfig {
    /// Load server settings from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_http_port);

        Self { http_port }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

const fn default_http_port() -> u16 {
    8080
}
