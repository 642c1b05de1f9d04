//! Base-to-quote conversion API adapter (tertiary tier).

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{ProviderError, RateProviderPort};
use crate::config::ProvidersConfig;
use crate::domain::{CurrencyPair, RateSource};

use super::{build_client, classify_transport_error, ensure_positive};

/// Response shape: `{ "rates": { "USD": 1.0521 } }`.
#[derive(Debug, Deserialize)]
struct ConversionResponse {
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

/// Adapter for the base-to-quote conversion API.
///
/// Requests a single cross rate for the pair's two legs.
#[derive(Debug, Clone)]
pub struct FrankfurterProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FrankfurterProvider {
    /// Create the adapter from provider configuration.
    pub fn new(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            base_url: config.frankfurter_base_url.clone(),
        })
    }
}

#[async_trait]
impl RateProviderPort for FrankfurterProvider {
    fn source(&self) -> RateSource {
        RateSource::Frankfurter
    }

    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ProviderError> {
        let url = format!(
            "{}/latest?from={}&to={}",
            self.base_url,
            pair.base(),
            pair.quote()
        );

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

        let body: ConversionResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::Malformed {
                    message: e.to_string(),
                })?;

        let rate = body
            .rates
            .get(pair.quote())
            .copied()
            .ok_or_else(|| ProviderError::MissingRate {
                pair: pair.code().to_string(),
            })?;

        ensure_positive(rate, pair)
    }
}
