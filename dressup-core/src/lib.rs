//! Shared wardrobe types for the dress-up workspace.
//!
//! Categories, the fixed layer order, outfits, stage geometry and the
//! on-disk asset layout live here so the catalog, compositor and UI crates
//! all agree on them.

pub mod assets;
pub mod category;
pub mod geometry;
pub mod outfit;

pub use assets::{AssetPaths, BASE_MODEL_FILE, ITEM_EXTENSION};
pub use category::{Category, ItemRef, ItemRefParseError, LAYER_ORDER, sort_categories};
pub use geometry::{Bounds, Point, Size, center_offset};
pub use outfit::Outfit;
