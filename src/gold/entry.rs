//! Price Cache Entry Module
//!
//! Defines the cached gold price with its fetch timestamp and the freshness
//! policy applied to it.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Price Cache Entry ==
/// Last known gold price and when it was fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCacheEntry {
    /// Price in USD per gram, `None` until seeded or fetched
    pub price: Option<f64>,
    /// Time of the last successful fetch, `None` before the first one
    pub last_updated: Option<DateTime<Utc>>,
}

impl PriceCacheEntry {
    // == Constructors ==
    /// Creates an entry holding a starting price that was never fetched.
    ///
    /// Non-positive seeds are ignored so the entry stays empty.
    pub fn seeded(seed: Option<f64>) -> Self {
        Self {
            price: seed.filter(|p| *p > 0.0),
            last_updated: None,
        }
    }

    // == Update ==
    /// Stores a freshly fetched price.
    pub fn update(&mut self, price: f64, now: DateTime<Utc>) {
        self.price = Some(price);
        self.last_updated = Some(now);
    }

    // == Age ==
    /// Time since the last fetch, or None if never fetched.
    ///
    /// A timestamp in the future (clock skew) counts as age zero.
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.last_updated
            .map(|at| (now - at).to_std().unwrap_or(Duration::ZERO))
    }

    // == Is Fresh ==
    /// Checks whether the entry can be served without a fetch.
    ///
    /// Boundary condition: an entry whose age equals the window is stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.price.is_some() && matches!(self.age(now), Some(age) if age < window)
    }

    // == Is Older Than ==
    /// True when never fetched or strictly older than `max_age`.
    pub fn is_older_than(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        match self.age(now) {
            Some(age) => age > max_age,
            None => true,
        }
    }

    /// Price usable as a fallback when a fetch fails.
    pub fn fallback_price(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }
}

// == Utility Functions ==
/// Rounds to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
