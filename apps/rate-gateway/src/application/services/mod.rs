//! Application services - resolution, aggregation and caching.

mod price_resolver;
mod rate_aggregator;
mod rate_cache;

pub use price_resolver::{PriceResolver, ResolvedRate};
pub use rate_aggregator::{AggregatedRate, RateAggregator};
pub use rate_cache::{CacheEntry, DEFAULT_CACHE_TTL, RateCache};
