//! HTTP adapters for the upstream quote providers.

mod exchange_rate_api;
mod frankfurter;
mod free_forex_api;

pub use exchange_rate_api::ExchangeRateApiProvider;
pub use frankfurter::FrankfurterProvider;
pub use free_forex_api::FreeForexApiProvider;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::ports::{ProviderError, RateProviderPort};
use crate::config::ProvidersConfig;
use crate::domain::CurrencyPair;

/// Build the client-side chain in priority order: the pair-keyed API,
/// then the base-currency table API.
pub fn client_chain(
    config: &ProvidersConfig,
) -> Result<Vec<Arc<dyn RateProviderPort>>, ProviderError> {
    Ok(vec![
        Arc::new(FreeForexApiProvider::new(config)?) as Arc<dyn RateProviderPort>,
        Arc::new(ExchangeRateApiProvider::new(config)?) as Arc<dyn RateProviderPort>,
    ])
}

/// Build the full aggregation-endpoint chain in priority order: the
/// pair-keyed API, the base-currency table API, then the conversion API.
pub fn full_chain(
    config: &ProvidersConfig,
) -> Result<Vec<Arc<dyn RateProviderPort>>, ProviderError> {
    Ok(vec![
        Arc::new(FreeForexApiProvider::new(config)?) as Arc<dyn RateProviderPort>,
        Arc::new(ExchangeRateApiProvider::new(config)?) as Arc<dyn RateProviderPort>,
        Arc::new(FrankfurterProvider::new(config)?) as Arc<dyn RateProviderPort>,
    ])
}

/// Classify a reqwest transport failure.
pub(crate) fn classify_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network {
            message: error.to_string(),
        }
    }
}

/// Reject non-positive rates as malformed.
pub(crate) fn ensure_positive(
    rate: Decimal,
    pair: &CurrencyPair,
) -> Result<Decimal, ProviderError> {
    if rate > Decimal::ZERO {
        Ok(rate)
    } else {
        Err(ProviderError::Malformed {
            message: format!("non-positive rate {rate} for {pair}"),
        })
    }
}

/// Build a reqwest client with the per-provider timeout.
pub(crate) fn build_client(timeout: std::time::Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Network {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_rate_passes() {
        let pair = CurrencyPair::resolve("EURUSD").unwrap();
        assert_eq!(ensure_positive(dec!(1.0521), &pair), Ok(dec!(1.0521)));
    }

    #[test]
    fn zero_and_negative_rates_are_malformed() {
        let pair = CurrencyPair::resolve("EURUSD").unwrap();
        assert!(matches!(
            ensure_positive(Decimal::ZERO, &pair),
            Err(ProviderError::Malformed { .. })
        ));
        assert!(matches!(
            ensure_positive(dec!(-1), &pair),
            Err(ProviderError::Malformed { .. })
        ));
    }
}
