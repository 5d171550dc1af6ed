//! Catalog Service Module
//!
//! Entry points used by the HTTP handlers: paged product queries and lookup
//! by id, both over a freshly loaded product list.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Product, ProductLoader, ProductQuery};
use crate::error::{CatalogError, Result};

/// One page of products.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub products: Vec<Product>,
    /// Products matching the filters, across all pages
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

// == Product Catalog ==
pub struct ProductCatalog {
    loader: ProductLoader,
}

impl ProductCatalog {
    pub fn new(loader: ProductLoader) -> Self {
        Self { loader }
    }

    // == Query Products ==
    /// Loads, filters and paginates the catalog.
    pub async fn query_products(&self, query: &ProductQuery, refresh: bool) -> Result<ProductResponse> {
        let products = self.loader.load_products(refresh).await?;
        let (page, total) = query.apply(products);
        debug!(total, returned = page.len(), page = query.page, "Product query");

        Ok(ProductResponse {
            products: page,
            total,
            page: query.page,
            per_page: query.per_page,
        })
    }

    // == Find Product ==
    /// Returns the product with `id`, or `NotFound`.
    ///
    /// Ids start at 1, so zero and negative ids are never found.
    pub async fn find_product(&self, id: i64, refresh: bool) -> Result<Product> {
        let wanted = u64::try_from(id).ok();
        self.loader
            .load_products(refresh)
            .await?
            .into_iter()
            .find(|p| Some(p.id) == wanted)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
