//! Gold Price Cache Module
//!
//! Serves the gold price from memory while fresh and refreshes it from the
//! price source otherwise, falling back to the last known value on failure.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::gold::{Clock, PriceCacheEntry, PriceCacheStats, PriceSource};

// == Price Reading ==
/// How a price read was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrigin {
    /// Fresh cached value, no fetch
    Cached,
    /// Fetched from the provider during this read
    Live,
    /// Fetch failed, last known value served
    Fallback,
}

/// A gold price together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReading {
    pub price: f64,
    pub last_updated: Option<DateTime<Utc>>,
    pub origin: PriceOrigin,
}

#[derive(Debug, Default)]
struct CacheState {
    entry: PriceCacheEntry,
    stats: PriceCacheStats,
}

// == Gold Price Cache ==
/// Single-value cache for the gold spot price.
///
/// The lock is only held to inspect or update state, never across a fetch,
/// so concurrent stale reads may each fetch; the last one to finish wins.
pub struct GoldPriceCache {
    state: RwLock<CacheState>,
    source: Arc<dyn PriceSource>,
    clock: Arc<dyn Clock>,
    /// Freshness window for plain reads
    ttl: Duration,
}

impl GoldPriceCache {
    // == Constructor ==
    /// Creates a cache over `source`.
    ///
    /// # Arguments
    /// * `source` - Provider used on refresh
    /// * `clock` - Time source for freshness checks
    /// * `ttl` - Freshness window
    /// * `seed` - Optional starting price served only as a fallback
    pub fn new(
        source: Arc<dyn PriceSource>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
        seed: Option<f64>,
    ) -> Self {
        Self {
            state: RwLock::new(CacheState {
                entry: PriceCacheEntry::seeded(seed),
                stats: PriceCacheStats::new(),
            }),
            source,
            clock,
            ttl,
        }
    }

    // == Get Price ==
    /// Returns the current gold price in USD per gram.
    pub async fn get_price(&self, force_refresh: bool) -> Result<f64> {
        self.read(force_refresh).await.map(|reading| reading.price)
    }

    // == Read ==
    /// Returns the current gold price and how it was obtained.
    ///
    /// Without `force_refresh` a fresh cached value is returned as is.
    /// Otherwise the source is called; on failure the last known price is
    /// served, and `NoPriceAvailable` is returned only if there is none.
    pub async fn read(&self, force_refresh: bool) -> Result<PriceReading> {
        if !force_refresh {
            let mut state = self.state.write().await;
            if state.entry.is_fresh(self.clock.now(), self.ttl) {
                if let Some(price) = state.entry.price {
                    state.stats.record_hit();
                    debug!("Serving cached gold price ${:.2}", price);
                    return Ok(PriceReading {
                        price,
                        last_updated: state.entry.last_updated,
                        origin: PriceOrigin::Cached,
                    });
                }
            }
        }

        match self.source.fetch_spot_price().await {
            Ok(price) => {
                let now = self.clock.now();
                let mut state = self.state.write().await;
                state.entry.update(price, now);
                state.stats.record_fetch();
                info!("Updated gold price: ${:.2} per gram", price);
                Ok(PriceReading {
                    price,
                    last_updated: Some(now),
                    origin: PriceOrigin::Live,
                })
            }
            Err(err) => {
                let mut state = self.state.write().await;
                let fallback = state.entry.fallback_price();
                state.stats.record_failure(fallback.is_some());

                match fallback {
                    Some(price) => {
                        warn!(error = %err, "Gold price fetch failed, using cached ${:.2}", price);
                        Ok(PriceReading {
                            price,
                            last_updated: state.entry.last_updated,
                            origin: PriceOrigin::Fallback,
                        })
                    }
                    None => {
                        warn!(error = %err, "Gold price fetch failed with no cached price");
                        Err(CatalogError::NoPriceAvailable(err.to_string()))
                    }
                }
            }
        }
    }

    // == Staleness ==
    /// True when never fetched or older than `max_age`.
    pub async fn is_older_than(&self, max_age: Duration) -> bool {
        let state = self.state.read().await;
        state.entry.is_older_than(self.clock.now(), max_age)
    }

    /// Copy of the current cache entry.
    pub async fn snapshot(&self) -> PriceCacheEntry {
        self.state.read().await.entry.clone()
    }

    /// Copy of the read counters.
    pub async fn stats(&self) -> PriceCacheStats {
        self.state.read().await.stats.clone()
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }
}
