//! Query Module
//!
//! Range filters and pagination over the priced product list.

use crate::catalog::{Product, DEFAULT_PER_PAGE};

// == Range Filter ==
/// Optional inclusive bounds on a numeric field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// True when `value` lies within every bound that is set.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

// == Product Query ==
/// A validated page request with its filters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    /// Bounds on the product price
    pub price: RangeFilter,
    /// Bounds on the display popularity (0-100)
    pub popularity: RangeFilter,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            price: RangeFilter::default(),
            popularity: RangeFilter::default(),
        }
    }
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        self.price.contains(product.price) && self.popularity.contains(product.popularity_score)
    }

    /// Zero-based index of the first item on the page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    // == Apply ==
    /// Filters `products` and cuts out the requested page.
    ///
    /// Returns the page and the number of products that passed the filters.
    pub fn apply(&self, products: Vec<Product>) -> (Vec<Product>, usize) {
        let filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total = filtered.len();
        (paginate(filtered, self.offset(), self.per_page), total)
    }
}

/// Returns the items in `[offset, offset + limit)`; empty past the end.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
