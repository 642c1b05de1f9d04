//! Currency pair value object and canonicalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency legs quoted against the dollar as `USDxxx`.
///
/// Every other single-currency leg canonicalizes to `xxxUSD`.
const USD_QUOTED_LEGS: [&str; 4] = ["JPY", "CAD", "MXN", "CHF"];

/// Error canonicalizing a pair identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    /// The input is neither a 3-letter currency leg nor a 6-letter pair code.
    #[error("unrecognized pair identifier: {input}")]
    Unrecognized {
        /// The rejected input, uppercased.
        input: String,
    },
}

/// A canonical currency pair in `BASEQUOTE` form (e.g. `EURUSD`).
///
/// Constructed from a pair identifier: a 6-letter pair code passes through
/// unchanged, while a single 3-letter currency leg is expanded against USD
/// using a fixed quoting table (JPY, CAD, MXN and CHF are conventionally
/// quoted as `USDxxx`; everything else as `xxxUSD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// Canonicalize a pair identifier into a `CurrencyPair`.
    ///
    /// Input is trimmed and uppercased before classification.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::Unrecognized`] when the input is not a 3-letter
    /// alphabetic currency leg or a 6-letter alphabetic pair code.
    pub fn resolve(input: &str) -> Result<Self, PairError> {
        let normalized = input.trim().to_uppercase();

        if !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PairError::Unrecognized { input: normalized });
        }

        match normalized.len() {
            3 => {
                if USD_QUOTED_LEGS.contains(&normalized.as_str()) {
                    Ok(Self(format!("USD{normalized}")))
                } else {
                    Ok(Self(format!("{normalized}USD")))
                }
            }
            6 => Ok(Self(normalized)),
            _ => Err(PairError::Unrecognized { input: normalized }),
        }
    }

    /// Get the canonical 6-letter pair code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Get the base currency leg (first three letters).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[..3]
    }

    /// Get the quote currency leg (last three letters).
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.0[3..]
    }

    /// Check whether the pair is quoted in yen (pip size 0.01).
    #[must_use]
    pub fn is_jpy_quoted(&self) -> bool {
        self.quote() == "JPY"
    }

    /// Check whether either leg of the pair is the given currency.
    #[must_use]
    pub fn involves(&self, leg: &str) -> bool {
        self.base() == leg || self.quote() == leg
    }

    /// Consume and return the inner pair code.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyPair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_quoted_legs_expand_to_usd_base() {
        for leg in ["JPY", "CAD", "MXN", "CHF"] {
            let pair = CurrencyPair::resolve(leg).unwrap();
            assert_eq!(pair.code(), format!("USD{leg}"));
        }
    }

    #[test]
    fn other_legs_expand_to_usd_quote() {
        for leg in ["EUR", "GBP", "AUD", "NZD"] {
            let pair = CurrencyPair::resolve(leg).unwrap();
            assert_eq!(pair.code(), format!("{leg}USD"));
        }
    }

    #[test]
    fn six_letter_codes_pass_through() {
        let pair = CurrencyPair::resolve("EURGBP").unwrap();
        assert_eq!(pair.code(), "EURGBP");
    }

    #[test]
    fn input_is_normalized() {
        let pair = CurrencyPair::resolve("  eurusd ").unwrap();
        assert_eq!(pair.code(), "EURUSD");

        let leg = CurrencyPair::resolve("jpy").unwrap();
        assert_eq!(leg.code(), "USDJPY");
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        assert!(CurrencyPair::resolve("BADCODE").is_err());
        assert!(CurrencyPair::resolve("EU").is_err());
        assert!(CurrencyPair::resolve("EUR/USD").is_err());
        assert!(CurrencyPair::resolve("").is_err());
    }

    #[test]
    fn leg_accessors() {
        let pair = CurrencyPair::resolve("EURJPY").unwrap();
        assert_eq!(pair.base(), "EUR");
        assert_eq!(pair.quote(), "JPY");
        assert!(pair.is_jpy_quoted());
        assert!(pair.involves("EUR"));
        assert!(pair.involves("JPY"));
        assert!(!pair.involves("USD"));
    }

    #[test]
    fn display_and_serde() {
        let pair = CurrencyPair::resolve("GBPUSD").unwrap();
        assert_eq!(format!("{pair}"), "GBPUSD");

        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"GBPUSD\"");
        let parsed: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
