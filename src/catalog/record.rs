//! Raw product records as stored in the product file.

use serde::Deserialize;

/// Image URLs keyed by gold color.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImages {
    pub yellow: String,
    pub white: String,
    pub rose: String,
}

/// One entry of the product file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub name: String,
    /// Unscaled popularity in 0.0..=1.0, used by the pricing formula
    #[serde(rename = "popularityScore")]
    pub raw_popularity: f64,
    /// Weight in grams
    pub weight: f64,
    pub images: RawImages,
}
