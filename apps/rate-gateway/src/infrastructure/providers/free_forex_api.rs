//! Pair-keyed live-rate API adapter (primary tier).

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{ProviderError, RateProviderPort};
use crate::config::ProvidersConfig;
use crate::domain::{CurrencyPair, RateSource};

use super::{build_client, classify_transport_error, ensure_positive};

/// Response shape: `{ "rates": { "EURUSD": { "rate": 1.0521, .. } } }`.
#[derive(Debug, Deserialize)]
struct LiveRatesResponse {
    #[serde(default)]
    rates: HashMap<String, LiveRate>,
}

#[derive(Debug, Deserialize)]
struct LiveRate {
    rate: Decimal,
}

/// Adapter for the pair-keyed live-rate API.
///
/// Queried with the exact canonical pair code; the response keys rates by
/// that same code.
#[derive(Debug, Clone)]
pub struct FreeForexApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FreeForexApiProvider {
    /// Create the adapter from provider configuration.
    pub fn new(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            base_url: config.freeforexapi_base_url.clone(),
        })
    }
}

#[async_trait]
impl RateProviderPort for FreeForexApiProvider {
    fn source(&self) -> RateSource {
        RateSource::FreeForexApi
    }

    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ProviderError> {
        let url = format!("{}/api/live?pairs={}", self.base_url, pair.code());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body: LiveRatesResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::Malformed {
                    message: e.to_string(),
                })?;

        let rate = body
            .rates
            .get(pair.code())
            .map(|entry| entry.rate)
            .ok_or_else(|| ProviderError::MissingRate {
                pair: pair.code().to_string(),
            })?;

        ensure_positive(rate, pair)
    }
}
