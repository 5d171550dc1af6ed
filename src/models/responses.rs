//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gold::{round_cents, PriceCacheStats, PriceOrigin, PriceReading, CURRENCY, UNIT};

/// Response body for the banner endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

impl RootResponse {
    pub fn new() -> Self {
        Self {
            message: "Product Listing API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "healthy".to_string(),
        }
    }
}

impl Default for RootResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /api/gold-price
#[derive(Debug, Clone, Serialize)]
pub struct GoldPriceResponse {
    /// USD per gram
    pub price: f64,
    pub currency: &'static str,
    pub unit: &'static str,
    pub last_updated: Option<DateTime<Utc>>,
    /// False when the price is a fallback after a failed fetch
    pub is_live: bool,
    pub source: String,
}

impl GoldPriceResponse {
    pub fn new(reading: &PriceReading, source: impl Into<String>) -> Self {
        Self {
            price: reading.price,
            currency: CURRENCY,
            unit: UNIT,
            last_updated: reading.last_updated,
            is_live: reading.origin != PriceOrigin::Fallback,
            source: source.into(),
        }
    }
}

/// Response body for POST /api/gold-price/refresh
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    /// True when the provider answered; false when a fallback was served
    pub success: bool,
    pub old_price: Option<f64>,
    pub new_price: f64,
    pub currency: &'static str,
    pub unit: &'static str,
    pub updated_at: Option<DateTime<Utc>>,
    /// `new_price - old_price` rounded to cents, null without an old price
    pub price_change: Option<f64>,
    pub source: String,
}

impl RefreshResponse {
    pub fn new(old_price: Option<f64>, reading: &PriceReading, source: impl Into<String>) -> Self {
        Self {
            success: reading.origin == PriceOrigin::Live,
            old_price,
            new_price: reading.price,
            currency: CURRENCY,
            unit: UNIT,
            updated_at: reading.last_updated,
            price_change: old_price.map(|old| round_cents(reading.price - old)),
            source: source.into(),
        }
    }
}

/// Response body for GET /api/gold-price/stats
#[derive(Debug, Clone, Serialize)]
pub struct PriceStatsResponse {
    #[serde(flatten)]
    pub stats: PriceCacheStats,
    /// Share of reads answered from the cache
    pub hit_rate: f64,
}

impl PriceStatsResponse {
    pub fn new(stats: PriceCacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(price: f64, origin: PriceOrigin) -> PriceReading {
        PriceReading {
            price,
            last_updated: Some(Utc::now()),
            origin,
        }
    }

    #[test]
    fn test_root_response_serialize() {
        let json = serde_json::to_value(RootResponse::new()).unwrap();
        assert_eq!(json["message"], "Product Listing API");
        assert_eq!(json["status"], "healthy");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_gold_price_response_fallback_is_not_live() {
        let resp = GoldPriceResponse::new(&reading(70.0, PriceOrigin::Fallback), "stub");
        assert!(!resp.is_live);
        assert_eq!(resp.unit, "per_gram");

        let resp = GoldPriceResponse::new(&reading(70.0, PriceOrigin::Cached), "stub");
        assert!(resp.is_live);
    }

    #[test]
    fn test_refresh_response_price_change() {
        let resp = RefreshResponse::new(Some(65.0), &reading(70.126, PriceOrigin::Live), "stub");
        assert!(resp.success);
        assert_eq!(resp.price_change, Some(5.13));
    }

    #[test]
    fn test_refresh_response_without_old_price() {
        let resp = RefreshResponse::new(None, &reading(70.0, PriceOrigin::Live), "stub");
        assert!(resp.price_change.is_none());
    }

    #[test]
    fn test_refresh_response_fallback_is_unsuccessful() {
        let resp = RefreshResponse::new(Some(65.0), &reading(65.0, PriceOrigin::Fallback), "stub");
        assert!(!resp.success);
        assert_eq!(resp.price_change, Some(0.0));
    }

    #[test]
    fn test_stats_response_flattens_counters() {
        let mut stats = PriceCacheStats::new();
        stats.record_hit();
        stats.record_fetch();
        let json = serde_json::to_value(PriceStatsResponse::new(stats)).unwrap();

        assert_eq!(json["cache_hits"], 1);
        assert_eq!(json["live_fetches"], 1);
        assert_eq!(json["hit_rate"], 0.5);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
