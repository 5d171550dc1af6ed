//! Product Loader Module
//!
//! Reads the product file and prices every record with the current gold price.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::catalog::{Product, RawProduct};
use crate::error::Result;
use crate::gold::GoldPriceCache;

// == Product Loader ==
/// Builds the priced product list from the static product file.
pub struct ProductLoader {
    path: PathBuf,
    gold: Arc<GoldPriceCache>,
    /// Price age beyond which a load forces a refresh
    max_price_age: Duration,
}

impl ProductLoader {
    pub fn new(path: impl Into<PathBuf>, gold: Arc<GoldPriceCache>, max_price_age: Duration) -> Self {
        Self {
            path: path.into(),
            gold,
            max_price_age,
        }
    }

    // == Load Products ==
    /// Loads and prices all products, in file order with ids from 1.
    ///
    /// A missing or malformed file yields an empty list. The gold price is
    /// refreshed when `force_gold_refresh` is set or the cached price is older
    /// than the hard age bound.
    pub async fn load_products(&self, force_gold_refresh: bool) -> Result<Vec<Product>> {
        let records = self.read_records().await;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let force = force_gold_refresh || self.gold.is_older_than(self.max_price_age).await;
        if force {
            info!("Refreshing gold price for product pricing");
        }
        let gold_price = self.gold.get_price(force).await?;

        Ok(records
            .into_iter()
            .zip(1u64..)
            .map(|(raw, id)| Product::from_raw(id, raw, gold_price))
            .collect())
    }

    async fn read_records(&self) -> Vec<RawProduct> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Product file {} not found", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                error!(error = %e, "Failed to read product file {}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to parse product file {}", self.path.display());
                Vec::new()
            }
        }
    }
}
