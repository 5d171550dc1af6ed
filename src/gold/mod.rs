//! Gold Price Module
//!
//! Fetches the gold spot price from an external provider and caches it with a
//! freshness window and last-known-value fallback.

mod cache;
mod clock;
mod entry;
mod source;
mod stats;

// Re-export public types
pub use cache::{GoldPriceCache, PriceOrigin, PriceReading};
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{round_cents, PriceCacheEntry};
pub use source::{parse_quote, GoldApiSource, PriceSource};
pub use stats::PriceCacheStats;

// == Public Constants ==
/// Currency every price is quoted in
pub const CURRENCY: &str = "USD";

/// Weight unit every price is quoted per
pub const UNIT: &str = "per_gram";
