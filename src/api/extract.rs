//! Request Extractors
//!
//! Wrappers over axum's `Query` and `Path` that report malformed input as
//! `CatalogError::InvalidRequest`, so every error body is JSON.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;

/// Query string extractor with JSON rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))
    }
}

/// Path parameter extractor with JSON rejections.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductListParams;
    use axum::http::Request;

    fn parts(uri: &str) -> Parts {
        Request::builder().uri(uri).body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_query_parses() {
        let mut parts = parts("/api/products?page=2&per_page=5");
        let ApiQuery(params) = ApiQuery::<ProductListParams>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(params.page, 2);
        assert_eq!(params.per_page, 5);
    }

    #[tokio::test]
    async fn test_query_rejection_is_invalid_request() {
        let mut parts = parts("/api/products?page=abc");
        let result = ApiQuery::<ProductListParams>::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(CatalogError::InvalidRequest(_))));
    }
}
