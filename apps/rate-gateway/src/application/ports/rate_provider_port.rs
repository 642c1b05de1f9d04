//! Rate Provider Port (Driven Port)
//!
//! Interface for fetching a single exchange rate from an upstream quote
//! provider. Implemented by the HTTP adapters in `infrastructure::providers`
//! and by hand-rolled mocks in tests. Resolution is a first-success fold
//! over an ordered list of these.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{CurrencyPair, RateSource};

/// Provider failure, typed by failure class.
///
/// Every variant is treated identically by callers (a miss that falls
/// through to the next tier), but the class is preserved for logging so a
/// timeout is distinguishable from a malformed body or a network outage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Provider unreachable.
    #[error("network error: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// Request exceeded the provider timeout.
    #[error("request exceeded the provider timeout")]
    Timeout,

    /// Provider returned a non-success HTTP status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// Response decoded but carried no rate for the requested pair.
    #[error("response missing rate for {pair}")]
    MissingRate {
        /// The canonical pair code.
        pair: String,
    },

    /// Response body could not be decoded, or carried an unusable rate.
    #[error("malformed response: {message}")]
    Malformed {
        /// Error details.
        message: String,
    },
}

/// Port for fetching exchange rates from one upstream provider.
#[async_trait]
pub trait RateProviderPort: Send + Sync {
    /// The source tier this provider reports as.
    fn source(&self) -> RateSource;

    /// Whether this provider covers the given pair.
    ///
    /// Unsupported pairs are skipped without an upstream call.
    fn supports(&self, _pair: &CurrencyPair) -> bool {
        true
    }

    /// Fetch the rate for a canonical pair.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] classifying the miss; callers fall
    /// through to the next tier.
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ProviderError>;
}
