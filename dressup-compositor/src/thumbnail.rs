use dressup_core::{AssetPaths, Category, Size};
use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::ComposeError;

/// Load an item image scaled to the picker thumbnail size.
///
/// The image is stretched to exactly `size`; picker cells are uniform
/// regardless of the source aspect ratio.
pub fn load_thumbnail(
    assets: &AssetPaths,
    category: &Category,
    item: &str,
    size: Size,
) -> Result<RgbaImage, ComposeError> {
    let path = assets.item_image(category, item);
    if !path.is_file() {
        return Err(ComposeError::AssetMissing {
            category: category.clone(),
            item: item.to_string(),
            path,
        });
    }
    if size.is_empty() {
        return Err(ComposeError::InvalidLayout(format!(
            "thumbnail must not be empty (got {}x{})",
            size.width, size.height
        )));
    }

    let image = image::open(&path)?.into_rgba8();
    if image.dimensions() == (size.width, size.height) {
        return Ok(image);
    }
    Ok(imageops::resize(
        &image,
        size.width,
        size.height,
        FilterType::Lanczos3,
    ))
}
