use std::path::PathBuf;

use dressup_core::Category;

/// Errors that can occur while dressing the model or exporting the stage.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image file not found for {category}/{item}: {}", path.display())]
    AssetMissing {
        category: Category,
        item: String,
        path: PathBuf,
    },

    #[error("Base model image not found: {}", .0.display())]
    BaseModelMissing(PathBuf),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Invalid stage layout: {0}")]
    InvalidLayout(String),
}
