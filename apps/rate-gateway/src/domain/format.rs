//! Pip-aware price display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::pair::CurrencyPair;

/// Decimal places for JPY- and MXN-involving pairs.
const COARSE_DECIMALS: usize = 2;

/// Decimal places for all other pairs.
const FINE_DECIMALS: usize = 4;

/// Format a price for display.
///
/// Pairs involving JPY or MXN quote in larger units and render at two
/// decimal places; every other pair renders at four.
#[must_use]
pub fn format_price(price: Decimal, pair: &CurrencyPair) -> String {
    let decimals = if pair.involves("JPY") || pair.involves("MXN") {
        COARSE_DECIMALS
    } else {
        FINE_DECIMALS
    };

    // Round away from zero first so the precision formatter only pads.
    #[allow(clippy::cast_possible_truncation)]
    let rounded =
        price.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pair(code: &str) -> CurrencyPair {
        CurrencyPair::resolve(code).unwrap()
    }

    #[test]
    fn jpy_pairs_render_two_decimals() {
        assert_eq!(format_price(dec!(150.2), &pair("USDJPY")), "150.20");
        assert_eq!(format_price(dec!(162.505), &pair("EURJPY")), "162.51");
    }

    #[test]
    fn mxn_pairs_render_two_decimals() {
        assert_eq!(format_price(dec!(20.3), &pair("USDMXN")), "20.30");
    }

    #[test]
    fn standard_pairs_render_four_decimals() {
        assert_eq!(format_price(dec!(1.052), &pair("EURUSD")), "1.0520");
        assert_eq!(format_price(dec!(1.26501), &pair("GBPUSD")), "1.2650");
    }

    #[test]
    fn currency_leg_identifiers_format_via_canonical_pair() {
        // "JPY" canonicalizes to USDJPY, "EUR" to EURUSD.
        assert_eq!(format_price(dec!(154.5), &pair("JPY")), "154.50");
        assert_eq!(format_price(dec!(1.052), &pair("EUR")), "1.0520");
    }
}
