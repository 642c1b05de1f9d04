//! Price quotes and the provider tiers that produce them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tier satisfied a rate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Pair-keyed live-rate API.
    #[serde(rename = "freeforexapi")]
    FreeForexApi,
    /// Base-currency exchange-rate table API.
    #[serde(rename = "exchangerate-api")]
    ExchangeRateApi,
    /// Base-to-quote conversion API.
    #[serde(rename = "frankfurter")]
    Frankfurter,
    /// Static hand-maintained fallback table.
    #[serde(rename = "fallback")]
    Fallback,
    /// Fresh in-memory cache entry (resolver-local staleness signal;
    /// never produced by the aggregation endpoint).
    #[serde(rename = "cache")]
    Cache,
}

impl RateSource {
    /// Get the wire tag for this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FreeForexApi => "freeforexapi",
            Self::ExchangeRateApi => "exchangerate-api",
            Self::Frankfurter => "frankfurter",
            Self::Fallback => "fallback",
            Self::Cache => "cache",
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved exchange rate with its fetch time.
///
/// Immutable once created; produced by a provider call or by the static
/// fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// The exchange rate. Always positive.
    pub rate: Decimal,
    /// When the rate was obtained.
    pub timestamp: DateTime<Utc>,
}

impl PriceQuote {
    /// Create a quote stamped with the current time.
    #[must_use]
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn source_wire_tags() {
        assert_eq!(RateSource::FreeForexApi.as_str(), "freeforexapi");
        assert_eq!(RateSource::ExchangeRateApi.as_str(), "exchangerate-api");
        assert_eq!(RateSource::Frankfurter.as_str(), "frankfurter");
        assert_eq!(RateSource::Fallback.as_str(), "fallback");
    }

    #[test]
    fn source_serializes_to_wire_tag() {
        let json = serde_json::to_string(&RateSource::ExchangeRateApi).unwrap();
        assert_eq!(json, "\"exchangerate-api\"");
    }

    #[test]
    fn quote_carries_rate() {
        let quote = PriceQuote::new(dec!(1.0520));
        assert_eq!(quote.rate, dec!(1.0520));
        assert!(quote.timestamp <= Utc::now());
    }
}
