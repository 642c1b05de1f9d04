// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::default_trait_access
    )
)]

//! Rate Gateway - Rust Core Library
//!
//! Multi-provider forex rate resolution with caching and ordered fallback.
//!
//! # Architecture
//!
//! - **Domain**: pair identity and canonicalization, quotes, the static
//!   fallback table, trade-zone derivation and price formatting. No I/O.
//! - **Application**: the `RateProviderPort` abstraction, the cached
//!   client-local `PriceResolver` and the server-side `RateAggregator`.
//! - **Infrastructure**: reqwest adapters for the three upstream quote
//!   providers.
//! - **Server**: the axum HTTP API exposing the batch aggregation endpoint.
//!
//! Resolution never fails outward: a fresh cache entry short-circuits,
//! provider misses fall through the ordered chain, and an exhausted chain
//! degrades to hand-maintained approximate rates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - core types with no external dependencies.
pub mod domain;

/// Application layer - services and port definitions.
pub mod application;

/// Infrastructure layer - upstream provider adapters.
pub mod infrastructure;

/// HTTP server - the aggregation API.
pub mod server;

/// Configuration loading.
pub mod config;

// Domain re-exports
pub use domain::{CurrencyPair, FallbackTable, PairError, PriceQuote, RateSource, TradeZone};
pub use domain::format_price;

// Application re-exports
pub use application::ports::{ProviderError, RateProviderPort};
pub use application::services::{
    AggregatedRate, PriceResolver, RateAggregator, RateCache, ResolvedRate,
};

// Infrastructure re-exports
pub use infrastructure::providers::{
    ExchangeRateApiProvider, FrankfurterProvider, FreeForexApiProvider, client_chain, full_chain,
};

// Server re-exports
pub use server::{AppState, create_router};

// Configuration re-exports
pub use config::{GatewayConfig, ProvidersConfig, ServerConfig};
