//! Static fallback rates used when every live provider is unavailable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Hand-maintained approximate rates for the major and minor pairs.
///
/// The terminal fallback of the resolution chain. Values are updated by
/// hand, never at runtime; treat them as display-grade approximations.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    rates: HashMap<&'static str, Decimal>,
}

impl FallbackTable {
    /// Build the table of curated approximate rates.
    #[must_use]
    pub fn new() -> Self {
        let rates = HashMap::from([
            ("EURUSD", dec!(1.0520)),
            ("GBPUSD", dec!(1.2650)),
            ("AUDUSD", dec!(0.6550)),
            ("NZDUSD", dec!(0.5950)),
            ("USDJPY", dec!(154.50)),
            ("USDCAD", dec!(1.3950)),
            ("USDCHF", dec!(0.8850)),
            ("USDMXN", dec!(20.35)),
            ("EURGBP", dec!(0.8320)),
            ("EURJPY", dec!(162.50)),
            ("EURCHF", dec!(0.9310)),
            ("GBPJPY", dec!(195.40)),
            ("GBPCHF", dec!(1.1190)),
            ("AUDJPY", dec!(101.20)),
            ("CADJPY", dec!(110.75)),
            ("CHFJPY", dec!(174.60)),
            ("AUDNZD", dec!(1.1010)),
        ]);

        Self { rates }
    }

    /// Look up the approximate rate for a canonical pair code.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Number of curated pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table is empty (it never is in practice).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}
