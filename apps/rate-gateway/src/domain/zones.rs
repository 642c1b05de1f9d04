//! Trade zone derivation from a current price and pip-size rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::pair::CurrencyPair;

/// Pip distances for one pair class.
struct PipRules {
    pip: Decimal,
    entry_buffer_pips: u32,
    target_pips: u32,
    stop_pips: u32,
}

/// Standard pairs: pip 0.0001, 30/150/80 pip entry/target/stop distances.
const STANDARD_RULES: PipRules = PipRules {
    pip: dec!(0.0001),
    entry_buffer_pips: 30,
    target_pips: 150,
    stop_pips: 80,
};

/// JPY-quoted pairs: pip 0.01, 50/200/100 pip entry/target/stop distances.
const JPY_RULES: PipRules = PipRules {
    pip: dec!(0.01),
    entry_buffer_pips: 50,
    target_pips: 200,
    stop_pips: 100,
};

/// Entry, target and stop bands derived from a current price.
///
/// Ephemeral; recomputed on every call from the price and the pair's pip
/// class alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeZone {
    /// Lower bound of the entry band.
    pub entry_low: Decimal,
    /// Upper bound of the entry band (the current price).
    pub entry_high: Decimal,
    /// Lower bound of the target band (80% of the target distance).
    pub target_low: Decimal,
    /// Upper bound of the target band.
    pub target_high: Decimal,
    /// Protective stop level.
    pub stop_price: Decimal,
}

impl TradeZone {
    /// Derive the zones around `current_price` for the given pair.
    #[must_use]
    pub fn compute(current_price: Decimal, pair: &CurrencyPair) -> Self {
        let rules = if pair.is_jpy_quoted() {
            JPY_RULES
        } else {
            STANDARD_RULES
        };

        let entry_buffer = rules.pip * Decimal::from(rules.entry_buffer_pips);
        let target_distance = rules.pip * Decimal::from(rules.target_pips);
        let stop_distance = rules.pip * Decimal::from(rules.stop_pips);

        Self {
            entry_low: current_price - entry_buffer,
            entry_high: current_price,
            target_low: current_price + target_distance * dec!(0.8),
            target_high: current_price + target_distance,
            stop_price: current_price - stop_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(code: &str) -> CurrencyPair {
        CurrencyPair::resolve(code).unwrap()
    }

    #[test]
    fn standard_pair_zones() {
        let zone = TradeZone::compute(dec!(1.0500), &pair("EURUSD"));

        assert_eq!(zone.entry_low, dec!(1.0470));
        assert_eq!(zone.entry_high, dec!(1.0500));
        assert_eq!(zone.target_low, dec!(1.0620));
        assert_eq!(zone.target_high, dec!(1.0650));
        assert_eq!(zone.stop_price, dec!(1.0420));
    }

    #[test]
    fn jpy_pair_zones() {
        let zone = TradeZone::compute(dec!(150.00), &pair("USDJPY"));

        assert_eq!(zone.entry_low, dec!(149.50));
        assert_eq!(zone.entry_high, dec!(150.00));
        assert_eq!(zone.target_low, dec!(151.60));
        assert_eq!(zone.target_high, dec!(152.00));
        assert_eq!(zone.stop_price, dec!(149.00));
    }

    #[test]
    fn jpy_cross_uses_jpy_rules() {
        let zone = TradeZone::compute(dec!(162.50), &pair("EURJPY"));
        assert_eq!(zone.entry_low, dec!(162.00));
        assert_eq!(zone.stop_price, dec!(161.50));
    }

    #[test]
    fn zones_are_ordered() {
        let zone = TradeZone::compute(dec!(0.6550), &pair("AUDUSD"));
        assert!(zone.stop_price < zone.entry_low);
        assert!(zone.entry_low < zone.entry_high);
        assert!(zone.entry_high < zone.target_low);
        assert!(zone.target_low < zone.target_high);
    }
}
