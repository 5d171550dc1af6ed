//! API Handlers
//!
//! HTTP request handlers for each catalog server endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use super::extract::{ApiPath, ApiQuery};
use crate::catalog::{Product, ProductCatalog, ProductLoader, ProductResponse};
use crate::config::Config;
use crate::error::Result;
use crate::gold::{GoldApiSource, GoldPriceCache, SystemClock};
use crate::models::{
    GoldPriceResponse, HealthResponse, PriceStatsResponse, ProductListParams, RefreshParams,
    RefreshResponse, RootResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gold price cache
    pub gold: Arc<GoldPriceCache>,
    /// Product catalog priced from `gold`
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(gold: Arc<GoldPriceCache>, catalog: ProductCatalog) -> Self {
        Self {
            gold,
            catalog: Arc::new(catalog),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the live gold provider and the system clock into the cache.
    pub fn from_config(config: &Config) -> Self {
        let source = Arc::new(GoldApiSource::new(
            config.gold_api_url.clone(),
            config.gold_api_key.clone(),
        ));
        let gold = Arc::new(GoldPriceCache::new(
            source,
            Arc::new(SystemClock),
            config.price_ttl(),
            config.seed_price,
        ));
        let loader = ProductLoader::new(
            config.products_path.clone(),
            gold.clone(),
            config.price_max_age(),
        );
        Self::new(gold, ProductCatalog::new(loader))
    }
}

/// Handler for GET /
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /api/products
///
/// Returns one page of products, optionally filtered by price and popularity.
pub async fn list_products_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> Result<Json<ProductResponse>> {
    let refresh = params.refresh;
    let query = params.into_query()?;

    let response = state.catalog.query_products(&query, refresh).await?;
    Ok(Json(response))
}

/// Handler for GET /api/products/:id
///
/// Ids are signed so a negative id is reported as not found.
pub async fn get_product_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<RefreshParams>,
) -> Result<Json<Product>> {
    let product = state.catalog.find_product(id, params.refresh).await?;
    Ok(Json(product))
}

/// Handler for GET /api/gold-price
pub async fn gold_price_handler(State(state): State<AppState>) -> Result<Json<GoldPriceResponse>> {
    let reading = state.gold.read(false).await?;
    Ok(Json(GoldPriceResponse::new(&reading, state.gold.source_name())))
}

/// Handler for POST /api/gold-price/refresh
///
/// Forces a provider fetch and reports the change against the prior price.
pub async fn refresh_gold_price_handler(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>> {
    let old_price = state.gold.snapshot().await.price;
    let reading = state.gold.read(true).await?;
    info!(?old_price, new_price = reading.price, "Gold price refresh requested");

    Ok(Json(RefreshResponse::new(
        old_price,
        &reading,
        state.gold.source_name(),
    )))
}

/// Handler for GET /api/gold-price/stats
pub async fn price_stats_handler(State(state): State<AppState>) -> Json<PriceStatsResponse> {
    Json(PriceStatsResponse::new(state.gold.stats().await))
}
