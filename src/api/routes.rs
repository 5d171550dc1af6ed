//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{
    http::{request::Parts, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_product_handler, gold_price_handler, health_handler, list_products_handler,
    price_stats_handler, refresh_gold_price_handler, root_handler, AppState,
};
use crate::config::{origin_matches, CorsPolicy};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Service banner
/// - `GET /health` - Health check endpoint
/// - `GET /api/products` - Filtered, paginated product list
/// - `GET /api/products/:id` - Single product
/// - `GET /api/gold-price` - Current gold price
/// - `POST /api/gold-price/refresh` - Force a gold price fetch
/// - `GET /api/gold-price/stats` - Gold price cache counters
///
/// # Middleware
/// - CORS: per `cors`, with credentials allowed
/// - Tracing: Logs all requests
pub fn create_router(state: AppState, cors: &CorsPolicy) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/products", get(list_products_handler))
        .route("/api/products/:id", get(get_product_handler))
        .route("/api/gold-price", get(gold_price_handler))
        .route("/api/gold-price/refresh", post(refresh_gold_price_handler))
        .route("/api/gold-price/stats", get(price_stats_handler))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer for a policy.
///
/// Credentials rule out `*` responses, so allowed origins, methods and
/// headers are echoed back from the request.
fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        CorsPolicy::AllowAll => AllowOrigin::mirror_request(),
        CorsPolicy::AllowList(patterns) => {
            let patterns = patterns.clone();
            AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                    .unwrap_or(false)
            })
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
