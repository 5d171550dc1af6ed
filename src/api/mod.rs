//! API Module
//!
//! HTTP handlers and routing for the catalog server REST API.
//!
//! # Endpoints
//! - `GET /` - Service banner
//! - `GET /health` - Health check endpoint
//! - `GET /api/products` - Filtered, paginated product list
//! - `GET /api/products/:id` - Single product
//! - `GET /api/gold-price` - Current gold price
//! - `POST /api/gold-price/refresh` - Force a gold price fetch
//! - `GET /api/gold-price/stats` - Gold price cache counters

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::{ApiPath, ApiQuery};
pub use handlers::*;
pub use routes::create_router;
