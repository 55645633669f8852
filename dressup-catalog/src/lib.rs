//! Wardrobe catalog: which items exist in which category.
//!
//! The catalog is built once from the asset directory tree and never
//! mutated afterwards. Consumers use it to populate category and item
//! pickers and to validate outfit requests before touching the stage.

pub mod catalog;
pub mod scan;

pub use catalog::Catalog;
pub use scan::{CatalogError, build_catalog};
