//! Price Cache Statistics Module
//!
//! Tracks how gold price reads were served.

use serde::Serialize;

// == Price Cache Stats ==
/// Counters for gold price reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceCacheStats {
    /// Reads served from a fresh cached price
    pub cache_hits: u64,
    /// Successful provider fetches
    pub live_fetches: u64,
    /// Failed provider fetches
    pub fetch_failures: u64,
    /// Failed fetches answered with the last known price
    pub fallbacks: u64,
}

impl PriceCacheStats {
    // == Constructor ==
    /// Creates a new PriceCacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Share of reads answered without contacting the provider.
    ///
    /// Returns 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.live_fetches + self.fetch_failures;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub fn record_fetch(&mut self) {
        self.live_fetches += 1;
    }

    // == Record Failure ==
    /// Counts a failed fetch, and whether a fallback price covered it.
    pub fn record_failure(&mut self, fell_back: bool) {
        self.fetch_failures += 1;
        if fell_back {
            self.fallbacks += 1;
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = PriceCacheStats::new();
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.live_fetches, 0);
        assert_eq!(stats.fetch_failures, 0);
        assert_eq!(stats.fallbacks, 0);
    }

    #[test]
    fn test_hit_rate_no_reads() {
        assert_eq!(PriceCacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = PriceCacheStats::new();
        stats.record_fetch();
        stats.record_hit();
        stats.record_hit();
        stats.record_failure(true);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_failure() {
        let mut stats = PriceCacheStats::new();
        stats.record_failure(true);
        stats.record_failure(false);
        assert_eq!(stats.fetch_failures, 2);
        assert_eq!(stats.fallbacks, 1);
    }
}
