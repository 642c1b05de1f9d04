//! Base-currency exchange-rate table API adapter (secondary tier).

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{ProviderError, RateProviderPort};
use crate::config::ProvidersConfig;
use crate::domain::{CurrencyPair, RateSource};

use super::{build_client, classify_transport_error, ensure_positive};

/// Response shape: `{ "rates": { "USD": 1.0521, "JPY": 162.50, .. } }`.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

/// Adapter for the base-currency exchange-rate table API.
///
/// Requests the full rate table for the pair's base currency and consults
/// the per-quote-currency field. Does not cover JPY crosses unless the
/// pair is USD-based, mirroring the upstream's coverage.
#[derive(Debug, Clone)]
pub struct ExchangeRateApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    /// Create the adapter from provider configuration.
    pub fn new(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            base_url: config.exchangerate_api_base_url.clone(),
        })
    }
}

#[async_trait]
impl RateProviderPort for ExchangeRateApiProvider {
    fn source(&self) -> RateSource {
        RateSource::ExchangeRateApi
    }

    fn supports(&self, pair: &CurrencyPair) -> bool {
        !(pair.involves("JPY") && !pair.involves("USD"))
    }

    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ProviderError> {
        let url = format!("{}/v4/latest/{}", self.base_url, pair.base());

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

        let body: LatestRatesResponse =
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> ExchangeRateApiProvider {
        let config = ProvidersConfig {
            exchangerate_api_base_url: server.uri(),
            timeout_secs: 1,
            ..Default::default()
        };
        ExchangeRateApiProvider::new(&config).unwrap()
    }

    fn pair(code: &str) -> CurrencyPair {
        CurrencyPair::resolve(code).unwrap()
    }

    #[tokio::test]
    async fn consults_the_quote_currency_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/GBP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "base": "GBP",
                "rates": { "USD": 1.2650, "EUR": 1.2023 }
            })))
            .mount(&server)
            .await;

        let rate = provider_for(&server).fetch_rate(&pair("GBPUSD")).await;

        assert_eq!(rate, Ok(dec!(1.2650)));
    }

    #[tokio::test]
    async fn quote_currency_absent_from_table_is_a_miss() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/EUR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "base": "EUR",
                "rates": { "GBP": 0.8320 }
            })))
            .mount(&server)
            .await;

        let result = provider_for(&server).fetch_rate(&pair("EURUSD")).await;

        assert_eq!(
            result,
            Err(ProviderError::MissingRate {
                pair: "EURUSD".to_string()
            })
        );
    }

    #[tokio::test]
    async fn covers_usd_based_jpy_pairs_only() {
        let server = MockServer::start().await;
        let provider = provider_for(&server);

        assert!(provider.supports(&pair("USDJPY")));
        assert!(provider.supports(&pair("EURUSD")));
        assert!(provider.supports(&pair("EURGBP")));
        assert!(!provider.supports(&pair("EURJPY")));
        assert!(!provider.supports(&pair("GBPJPY")));
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_miss() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/EUR"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = provider_for(&server).fetch_rate(&pair("EURUSD")).await;

        assert_eq!(result, Err(ProviderError::Status { status: 429 }));
    }
}
