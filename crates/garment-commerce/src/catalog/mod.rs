//! Product catalog module.
//!
//! Contains the read-only product reference data and the shop browse query.

mod browse;
mod product;
mod store;

pub use browse::{CatalogQuery, SortOption};
pub use product::{Product, Variant};
pub use store::Catalog;
