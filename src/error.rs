//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found in the catalog
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No gold price could be fetched and none was cached
    #[error("No gold price available: {0}")]
    NoPriceAvailable(String),
}

// == Price Fetch Error Enum ==
/// Failure talking to the external gold quote provider.
#[derive(Error, Debug)]
pub enum PriceFetchError {
    /// Transport-level failure (connection, TLS, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-200 status
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON envelope
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Envelope status was not "success"
    #[error("provider reported status '{0}'")]
    Rejected(String),

    /// Price field was present but unusable
    #[error("invalid price value: {0}")]
    InvalidPrice(f64),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CatalogError::NoPriceAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;
