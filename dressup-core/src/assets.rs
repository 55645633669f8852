use std::path::{Path, PathBuf};

use crate::Category;

/// File name of the base figure inside the asset root.
pub const BASE_MODEL_FILE: &str = "Complete Base Model v1.png";

/// Extension of wardrobe item images.
pub const ITEM_EXTENSION: &str = "png";

/// Resolves files inside the asset root: `<root>/<category>/<item>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a category's images (lowercased).
    pub fn category_dir(&self, category: &Category) -> PathBuf {
        self.root.join(category.asset_dir_name())
    }

    pub fn item_image(&self, category: &Category, item: &str) -> PathBuf {
        self.category_dir(category)
            .join(format!("{}.{}", item, ITEM_EXTENSION))
    }

    pub fn base_model(&self) -> PathBuf {
        self.root.join(BASE_MODEL_FILE)
    }
}
