//! Price Source Module
//!
//! Adapter for the external gold quote provider.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::PriceFetchError;
use crate::gold::round_cents;

/// Metal code requested from the provider
const METAL: &str = "XAU";

/// Provider of the gold spot price in USD per gram.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_spot_price(&self) -> Result<f64, PriceFetchError>;

    /// Name reported as the price source in API responses.
    fn source_name(&self) -> &str;
}

// == Provider Envelope ==
#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    status: String,
    data: Option<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    metal_prices: HashMap<String, MetalPrice>,
}

#[derive(Debug, Deserialize)]
struct MetalPrice {
    price: f64,
}

/// Extracts the XAU price from a provider response body.
///
/// The provider already quotes per gram, so the value is only rounded to
/// cents. Non-finite and non-positive prices are rejected.
pub fn parse_quote(body: &str) -> Result<f64, PriceFetchError> {
    let envelope: QuoteEnvelope =
        serde_json::from_str(body).map_err(|e| PriceFetchError::Malformed(e.to_string()))?;

    if envelope.status != "success" {
        return Err(PriceFetchError::Rejected(envelope.status));
    }

    let price = envelope
        .data
        .and_then(|data| data.metal_prices.get(METAL).map(|m| m.price))
        .ok_or_else(|| PriceFetchError::Malformed(format!("missing data.metal_prices.{METAL}")))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(PriceFetchError::InvalidPrice(price));
    }

    Ok(round_cents(price))
}

// == Gold API Source ==
/// Quote provider speaking the `/v1/latest` metals API.
#[derive(Debug, Clone)]
pub struct GoldApiSource {
    client: Client,
    base_url: String,
    api_key: String,
    name: String,
}

impl GoldApiSource {
    /// Creates a source for the provider at `base_url`.
    ///
    /// Uses reqwest's default client, so no request timeout is enforced.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let name = base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string();

        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
            name,
        }
    }

    fn latest_url(&self) -> String {
        format!("{}/v1/latest", self.base_url)
    }
}

#[async_trait]
impl PriceSource for GoldApiSource {
    async fn fetch_spot_price(&self) -> Result<f64, PriceFetchError> {
        info!("Fetching live gold price from {}", self.name);

        let response = self
            .client
            .get(self.latest_url())
            .header("x-api-key", &self.api_key)
            .query(&[
                ("metals", METAL),
                ("base_currency", "USD"),
                ("currencies", "USD"),
                ("weight_unit", "gram"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PriceFetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(body = %body, "Gold API response");

        let price = parse_quote(&body)?;
        info!("Gold price from {}: ${:.2} per gram", self.name, price);
        Ok(price)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_success() {
        let body = r#"{
            "status": "success",
            "data": {"metal_prices": {"XAU": {"price": 71.2345, "open": 70.9}}}
        }"#;
        assert_eq!(parse_quote(body).unwrap(), 71.23);
    }

    #[test]
    fn test_parse_quote_rejected_status() {
        let body = r#"{"status": "error", "data": null}"#;
        assert!(matches!(parse_quote(body), Err(PriceFetchError::Rejected(s)) if s == "error"));
    }

    #[test]
    fn test_parse_quote_missing_metal() {
        let body = r#"{"status": "success", "data": {"metal_prices": {"XAG": {"price": 0.9}}}}"#;
        assert!(matches!(parse_quote(body), Err(PriceFetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_quote_missing_data() {
        let body = r#"{"status": "success"}"#;
        assert!(matches!(parse_quote(body), Err(PriceFetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_quote_not_json() {
        assert!(matches!(
            parse_quote("<html>bad gateway</html>"),
            Err(PriceFetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_quote_non_numeric_price() {
        let body = r#"{"status": "success", "data": {"metal_prices": {"XAU": {"price": "71"}}}}"#;
        assert!(matches!(parse_quote(body), Err(PriceFetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_quote_non_positive_price() {
        let body = r#"{"status": "success", "data": {"metal_prices": {"XAU": {"price": 0}}}}"#;
        assert!(matches!(parse_quote(body), Err(PriceFetchError::InvalidPrice(_))));
    }

    #[test]
    fn test_source_name_strips_scheme() {
        let source = GoldApiSource::new("https://gold.g.apised.com/", "key");
        assert_eq!(source.source_name(), "gold.g.apised.com");
        assert_eq!(source.latest_url(), "https://gold.g.apised.com/v1/latest");
    }
}
