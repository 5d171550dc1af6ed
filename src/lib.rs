//! Gold Catalog - A jewelry product catalog server
//!
//! Prices every product from the live gold spot price, cached in memory with a
//! freshness window, and serves filtered, paginated listings over HTTP.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gold;
pub mod models;

pub use api::AppState;
pub use config::Config;
