//! In-memory rate cache with a fixed freshness window.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{PriceQuote, RateSource};

/// Default freshness window for cached rates.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// A cached resolution for one canonical pair.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached quote.
    pub quote: PriceQuote,
    /// Which tier produced the quote.
    pub source: RateSource,
    /// When the quote was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Whether the entry is still fresh at `now`.
    fn is_fresh_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .is_ok_and(|age| age < ttl)
    }
}

/// Cache of pair code → entry, owned by the resolver that constructs it.
///
/// Entries are overwritten on every successful refresh and never deleted;
/// they simply stop being returned once older than the freshness window.
/// Repeated resolutions inside the window are satisfied from memory,
/// bounding the upstream request rate per pair regardless of caller volume.
#[derive(Debug)]
pub struct RateCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl RateCache {
    /// Create a cache with the default 60-second freshness window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Create a cache with a custom freshness window.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the entry for a pair code if it is still fresh.
    #[must_use]
    pub fn fresh(&self, code: &str) -> Option<CacheEntry> {
        self.fresh_at(code, Utc::now())
    }

    /// Freshness check against an explicit clock (used by tests).
    pub(crate) fn fresh_at(&self, code: &str, now: DateTime<Utc>) -> Option<CacheEntry> {
        let entries = self.entries.read();
        entries
            .get(code)
            .filter(|entry| entry.is_fresh_at(self.ttl, now))
            .cloned()
    }

    /// Store a fresh entry, overwriting any previous one for the pair.
    pub fn store(&self, code: &str, quote: PriceQuote, source: RateSource) {
        let entry = CacheEntry {
            quote,
            source,
            fetched_at: Utc::now(),
        };
        self.entries.write().insert(code.to_string(), entry);
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
