//! Catalog Module
//!
//! Loads the static product list, prices it from the gold price, and answers
//! filtered, paginated queries over the result.

mod loader;
mod product;
mod query;
mod record;
mod service;


// Re-export public types
pub use loader::ProductLoader;
pub use product::{calculate_price, display_popularity, Color, Product, GOLD_COLORS};
pub use query::{paginate, ProductQuery, RangeFilter};
pub use record::{RawImages, RawProduct};
pub use service::{ProductCatalog, ProductResponse};

// == Public Constants ==
/// Largest page size a query may request
pub const MAX_PER_PAGE: usize = 50;

/// Page size used when none is requested
pub const DEFAULT_PER_PAGE: usize = 10;
