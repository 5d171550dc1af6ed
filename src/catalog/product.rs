//! Product Module
//!
//! Priced catalog products and the pricing formula.

use serde::Serialize;

use crate::catalog::RawProduct;
use crate::gold::round_cents;

// == Color ==
/// A gold color option shown for every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The three gold colors, in image order.
pub const GOLD_COLORS: [Color; 3] = [
    Color {
        name: "Yellow Gold",
        hex: "#FECA97",
    },
    Color {
        name: "White Gold",
        hex: "#D9D9D9",
    },
    Color {
        name: "Rose Gold",
        hex: "#F1AAA9",
    },
];

// == Product ==
/// A catalog product with its derived price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// 1-based position in the product file
    pub id: u64,
    pub name: String,
    /// Display popularity, raw score × 100
    #[serde(rename = "popularityScore")]
    pub popularity_score: f64,
    /// Weight in grams
    pub weight: f64,
    pub colors: [Color; 3],
    /// Image URLs aligned with `colors`
    pub images: [String; 3],
    /// Price in USD, rounded to cents
    pub price: f64,
}

impl Product {
    // == Constructor ==
    /// Builds a priced product from a raw record.
    ///
    /// The price uses the raw popularity; only the stored score is scaled.
    pub fn from_raw(id: u64, raw: RawProduct, gold_price: f64) -> Self {
        let price = calculate_price(raw.raw_popularity, raw.weight, gold_price);

        Self {
            id,
            name: raw.name,
            popularity_score: display_popularity(raw.raw_popularity),
            weight: raw.weight,
            colors: GOLD_COLORS,
            images: [raw.images.yellow, raw.images.white, raw.images.rose],
            price,
        }
    }
}

/// Scales a raw 0..1 popularity to the 0..100 display range.
pub fn display_popularity(raw_popularity: f64) -> f64 {
    raw_popularity * 100.0
}

/// `(popularity + 1) × weight × gold price`, rounded to cents.
///
/// `raw_popularity` must be the unscaled score.
pub fn calculate_price(raw_popularity: f64, weight: f64, gold_price: f64) -> f64 {
    round_cents((raw_popularity + 1.0) * weight * gold_price)
}
