//! Server-side batch rate aggregation across the full provider chain.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::ports::RateProviderPort;
use crate::application::services::price_resolver::first_success;
use crate::domain::{CurrencyPair, FallbackTable, RateSource};

/// One aggregated rate, annotated with the tier that satisfied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRate {
    /// The resolved exchange rate.
    pub rate: Decimal,
    /// Which tier produced it.
    pub source: RateSource,
}

/// Batch resolution over the full provider chain for the HTTP endpoint.
///
/// Pairs are resolved sequentially, each through the same first-success
/// fold as the client resolver but without a cache; an exhausted chain
/// falls to the static table and pairs absent from it are omitted. A miss
/// never aborts the batch.
pub struct RateAggregator {
    providers: Vec<Arc<dyn RateProviderPort>>,
    fallback: FallbackTable,
}

impl RateAggregator {
    /// Create an aggregator over the given provider chain.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn RateProviderPort>>) -> Self {
        Self {
            providers,
            fallback: FallbackTable::new(),
        }
    }

    /// Resolve a batch of pair codes, keyed by canonical pair code.
    pub async fn aggregate(&self, codes: &[&str]) -> HashMap<String, AggregatedRate> {
        let mut rates = HashMap::new();

        for code in codes {
            let Ok(pair) = CurrencyPair::resolve(code) else {
                tracing::warn!(input = *code, "Skipping unrecognized pair code");
                continue;
            };

            if let Some((rate, source)) = first_success(&self.providers, &pair).await {
                rates.insert(pair.into_inner(), AggregatedRate { rate, source });
            } else if let Some(rate) = self.fallback.rate(pair.code()) {
                tracing::warn!(pair = %pair, "All providers missed, serving fallback rate");
                rates.insert(
                    pair.into_inner(),
                    AggregatedRate {
                        rate,
                        source: RateSource::Fallback,
                    },
                );
            } else {
                tracing::warn!(pair = %pair, "No provider or fallback rate, omitting pair");
            }
        }

        rates
    }
}
