//! Search module.
//!
//! Filtering and sorting over the in-memory catalog. Everything here is pure:
//! the source catalog is never mutated and the same inputs always produce the
//! same view.

mod query;
mod filter;
mod results;

pub use query::{CatalogQuery, CategoryFilter, SortKey, ViewMode};
pub use filter::{filter_products, matches_text, sort_products};
pub use results::CatalogView;
