//! Client-local price resolution with caching and ordered provider fallback.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future;
use rust_decimal::Decimal;

use crate::application::ports::RateProviderPort;
use crate::application::services::rate_cache::RateCache;
use crate::domain::{CurrencyPair, FallbackTable, PriceQuote, RateSource};

/// Terminal default when a pair is missing from the fallback table.
const NEUTRAL_RATE: Decimal = Decimal::ONE;

/// A resolution result with its staleness signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRate {
    /// The resolved exchange rate.
    pub rate: Decimal,
    /// Which tier satisfied the resolution. [`RateSource::Cache`] marks a
    /// rate served from memory without an upstream call.
    pub source: RateSource,
    /// When the underlying quote was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Try each provider in priority order, returning the first success.
///
/// Misses are logged with their failure class and swallowed; unsupported
/// pairs are skipped without an upstream call.
pub(crate) async fn first_success(
    providers: &[Arc<dyn RateProviderPort>],
    pair: &CurrencyPair,
) -> Option<(Decimal, RateSource)> {
    for provider in providers {
        if !provider.supports(pair) {
            tracing::debug!(
                provider = provider.source().as_str(),
                pair = %pair,
                "Provider does not cover pair, skipping"
            );
            continue;
        }

        match provider.fetch_rate(pair).await {
            Ok(rate) => {
                tracing::debug!(
                    provider = provider.source().as_str(),
                    pair = %pair,
                    rate = %rate,
                    "Got rate from provider"
                );
                return Some((rate, provider.source()));
            }
            Err(error) => {
                tracing::warn!(
                    provider = provider.source().as_str(),
                    pair = %pair,
                    error = %error,
                    "Provider failed to return rate"
                );
            }
        }
    }

    None
}

/// Resolves currency-pair rates against an ordered provider chain.
///
/// Never fails: a fresh cache entry short-circuits, provider misses fall
/// through the chain, and an exhausted chain degrades to the static
/// fallback table or the neutral default. The cache is owned by the
/// resolver, so independent resolvers (and tests) get independent caches.
pub struct PriceResolver {
    providers: Vec<Arc<dyn RateProviderPort>>,
    cache: RateCache,
    fallback: FallbackTable,
}

impl PriceResolver {
    /// Create a resolver over the given provider chain with a fresh cache.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn RateProviderPort>>) -> Self {
        Self::with_cache(providers, RateCache::new())
    }

    /// Create a resolver with an explicit cache instance.
    #[must_use]
    pub fn with_cache(providers: Vec<Arc<dyn RateProviderPort>>, cache: RateCache) -> Self {
        Self {
            providers,
            cache,
            fallback: FallbackTable::new(),
        }
    }

    /// Resolve a pair identifier to a usable rate.
    ///
    /// Always returns a number; every failure mode degrades to a less
    /// fresh value rather than an error.
    pub async fn resolve(&self, pair_or_currency: &str) -> Decimal {
        self.resolve_with_source(pair_or_currency).await.rate
    }

    /// Resolve a pair identifier, surfacing which tier satisfied it.
    pub async fn resolve_with_source(&self, pair_or_currency: &str) -> ResolvedRate {
        let Ok(pair) = CurrencyPair::resolve(pair_or_currency) else {
            tracing::warn!(
                input = pair_or_currency,
                "Unrecognized pair identifier, using neutral default"
            );
            return ResolvedRate {
                rate: NEUTRAL_RATE,
                source: RateSource::Fallback,
                fetched_at: Utc::now(),
            };
        };

        if let Some(entry) = self.cache.fresh(pair.code()) {
            tracing::debug!(pair = %pair, rate = %entry.quote.rate, "Cache hit");
            return ResolvedRate {
                rate: entry.quote.rate,
                source: RateSource::Cache,
                fetched_at: entry.fetched_at,
            };
        }

        if let Some((rate, source)) = first_success(&self.providers, &pair).await {
            let quote = PriceQuote::new(rate);
            let fetched_at = quote.timestamp;
            self.cache.store(pair.code(), quote, source);
            return ResolvedRate {
                rate,
                source,
                fetched_at,
            };
        }

        let rate = self.fallback.rate(pair.code()).unwrap_or(NEUTRAL_RATE);
        tracing::warn!(
            pair = %pair,
            rate = %rate,
            "All providers missed, using fallback rate"
        );
        ResolvedRate {
            rate,
            source: RateSource::Fallback,
            fetched_at: Utc::now(),
        }
    }

    /// Resolve a batch of identifiers concurrently.
    ///
    /// Results are keyed by canonical pair code (the uppercased input when
    /// canonicalization fails). No ordering guarantee between pairs; each
    /// pair independently falls back to its own default.
    pub async fn resolve_many(&self, identifiers: &[&str]) -> HashMap<String, Decimal> {
        let resolutions = identifiers.iter().map(|identifier| async move {
            let key = CurrencyPair::resolve(identifier)
                .map_or_else(|_| identifier.trim().to_uppercase(), CurrencyPair::into_inner);
            let rate = self.resolve(identifier).await;
            (key, rate)
        });

        future::join_all(resolutions).await.into_iter().collect()
    }
}
