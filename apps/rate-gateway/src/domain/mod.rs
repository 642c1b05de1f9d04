//! Domain layer - pair identity, quotes, zones and formatting. No I/O.

mod fallback;
mod format;
mod pair;
mod quote;
mod zones;

pub use fallback::FallbackTable;
pub use format::format_price;
pub use pair::{CurrencyPair, PairError};
pub use quote::{PriceQuote, RateSource};
pub use zones::TradeZone;
