//! Request DTOs for the catalog API
//!
//! Defines the query strings accepted by the product and gold price endpoints.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::catalog::{ProductQuery, RangeFilter, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::error::{CatalogError, Result};

/// Query string for GET /api/products
///
/// Page fields are signed so out-of-range values reach validation instead of
/// failing to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
    /// Force a gold price refresh before pricing
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub refresh: bool,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE as i64
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            min_price: None,
            max_price: None,
            min_popularity: None,
            max_popularity: None,
            refresh: false,
        }
    }
}

impl ProductListParams {
    /// Validates the parameters and converts them into a catalog query.
    pub fn into_query(self) -> Result<ProductQuery> {
        if self.page < 1 {
            return Err(invalid("page must be at least 1"));
        }
        if self.per_page < 1 || self.per_page > MAX_PER_PAGE as i64 {
            return Err(invalid(format!("per_page must be between 1 and {}", MAX_PER_PAGE)));
        }

        let prices = [("min_price", self.min_price), ("max_price", self.max_price)];
        for (name, value) in prices {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid(format!("{} must be a non-negative number", name)));
                }
            }
        }

        let popularity = [
            ("min_popularity", self.min_popularity),
            ("max_popularity", self.max_popularity),
        ];
        for (name, value) in popularity {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                    return Err(invalid(format!("{} must be between 0 and 100", name)));
                }
            }
        }

        Ok(ProductQuery {
            page: self.page as usize,
            per_page: self.per_page as usize,
            price: RangeFilter::new(self.min_price, self.max_price),
            popularity: RangeFilter::new(self.min_popularity, self.max_popularity),
        })
    }
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRequest(message.into())
}

/// Query string for GET /api/products/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshParams {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub refresh: bool,
}

// == Flag Parsing ==
/// Accepts a JSON bool or the usual query string spellings of one
/// (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`), case-insensitively.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean such as true, false, 1, 0, yes, no, on or off")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<bool, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<bool, E> {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<bool, E> {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
