//! Outfit state and layer stacking over the base model.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dressup_core::{AssetPaths, Bounds, Category, Outfit, Point, Size, center_offset};
use image::RgbaImage;

use crate::ComposeError;
use crate::screenshot::save_screenshot;
use crate::surface::{LayerHandle, RenderSurface};

/// One equipped item as it sits on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WornLayer {
    /// Category as it was last equipped, case included.
    pub category: Category,
    pub item: String,
    pub handle: LayerHandle,
    pub position: Point,
    pub size: Size,
}

#[derive(Debug)]
struct BaseModel {
    handle: LayerHandle,
    bounds: Bounds,
}

/// Dresses the base model: owns the surface, the base layer, and exactly one
/// layer per equipped category.
///
/// After every change the stack is base model first, then worn items in
/// layer order regardless of the order they were put on.
///
/// Slots are keyed by the lowercased category, the same name used to find
/// item images, so `TOPS` and `tops` share one slot.
pub struct Compositor<S: RenderSurface> {
    surface: S,
    assets: AssetPaths,
    base: BaseModel,
    worn: HashMap<String, WornLayer>,
}

impl<S: RenderSurface> Compositor<S> {
    /// Load the base model and center it on the surface's stage.
    pub fn new(mut surface: S, assets: AssetPaths) -> Result<Self, ComposeError> {
        let base_path = assets.base_model();
        if !base_path.is_file() {
            return Err(ComposeError::BaseModelMissing(base_path));
        }

        let image = image::open(&base_path)?.into_rgba8();
        let size = Size::new(image.width(), image.height());
        let origin = center_offset(surface.stage_size(), size);
        let handle = surface.create_layer(image, origin);
        surface.lower_to_bottom(handle);
        log::debug!(
            "Base model {}x{} placed at ({}, {})",
            size.width,
            size.height,
            origin.x,
            origin.y
        );

        Ok(Self {
            surface,
            assets,
            base: BaseModel {
                handle,
                bounds: Bounds::from_origin(origin, size),
            },
            worn: HashMap::new(),
        })
    }

    /// Put `item` on in `category`, replacing whatever was worn there.
    ///
    /// Fails without changing anything if the item's image is missing or
    /// cannot be decoded.
    pub fn equip(&mut self, category: &Category, item: &str) -> Result<(), ComposeError> {
        let path = self.assets.item_image(category, item);
        if !path.is_file() {
            return Err(ComposeError::AssetMissing {
                category: category.clone(),
                item: item.to_string(),
                path,
            });
        }
        let image = image::open(&path)?.into_rgba8();

        let slot = slot_key(category.as_str());
        if let Some(previous) = self.worn.remove(&slot) {
            self.surface.remove_layer(previous.handle);
            log::debug!("Took off {}/{}", category, previous.item);
        }

        let size = Size::new(image.width(), image.height());
        let position = self.base.bounds.origin() + center_offset(self.base.bounds.size(), size);
        let handle = self.surface.create_layer(image, position);
        self.worn.insert(
            slot,
            WornLayer {
                category: category.clone(),
                item: item.to_string(),
                handle,
                position,
                size,
            },
        );
        log::debug!(
            "Equipped {}/{} at ({}, {})",
            category,
            item,
            position.x,
            position.y
        );

        self.recompute_draw_order();
        Ok(())
    }

    /// Take off whatever is worn in `category`. Returns the removed item name.
    pub fn unequip(&mut self, category: &str) -> Option<String> {
        let worn = self.worn.remove(&slot_key(category))?;
        self.surface.remove_layer(worn.handle);
        log::debug!("Took off {}/{}", category, worn.item);
        Some(worn.item)
    }

    /// Take everything off.
    pub fn clear(&mut self) {
        for (_, worn) in self.worn.drain() {
            self.surface.remove_layer(worn.handle);
        }
    }

    /// Restack worn layers in layer order and push the base model to the bottom.
    ///
    /// Each category is raised to the top in turn, so the last one raised
    /// ends up frontmost.
    pub fn recompute_draw_order(&mut self) {
        let mut worn: Vec<(&Category, LayerHandle)> =
            self.worn.values().map(|w| (&w.category, w.handle)).collect();
        worn.sort_by(|a, b| a.0.draw_cmp(b.0));
        let handles: Vec<LayerHandle> = worn.into_iter().map(|(_, h)| h).collect();

        for handle in handles {
            self.surface.raise_to_top(handle);
        }
        self.surface.lower_to_bottom(self.base.handle);
    }

    /// Equipped categories as stacked on the surface, bottom to top.
    pub fn draw_order(&self) -> Vec<Category> {
        self.surface
            .layer_order()
            .into_iter()
            .filter_map(|handle| {
                self.worn
                    .values()
                    .find(|w| w.handle == handle)
                    .map(|w| w.category.clone())
            })
            .collect()
    }

    /// Snapshot of what is currently worn.
    pub fn outfit(&self) -> Outfit {
        self.worn
            .values()
            .map(|w| (w.category.clone(), w.item.clone()))
            .collect()
    }

    pub fn equipped_item(&self, category: &str) -> Option<&str> {
        self.worn.get(&slot_key(category)).map(|w| w.item.as_str())
    }

    pub fn worn_layer(&self, category: &str) -> Option<&WornLayer> {
        self.worn.get(&slot_key(category))
    }

    /// Top-left stage position of the item worn in `category`.
    pub fn position(&self, category: &str) -> Option<Point> {
        self.worn.get(&slot_key(category)).map(|w| w.position)
    }

    pub fn base_bounds(&self) -> Bounds {
        self.base.bounds
    }

    pub fn base_handle(&self) -> LayerHandle {
        self.base.handle
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Flatten the model's bounding box.
    pub fn capture(&self) -> Result<RgbaImage, ComposeError> {
        self.surface.capture_region(self.base.bounds)
    }

    /// Capture the model and write it as a timestamped PNG inside `dir`.
    pub fn save_screenshot(&self, dir: &Path) -> Result<PathBuf, ComposeError> {
        let image = self.capture()?;
        save_screenshot(&image, dir)
    }

    /// Capture the model and write it to an explicit file path.
    pub fn save_capture(&self, path: &Path) -> Result<(), ComposeError> {
        let image = self.capture()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image.save(path)?;
        log::info!("Outfit saved as {}", path.display());
        Ok(())
    }
}

fn slot_key(category: &str) -> String {
    category.to_lowercase()
}

#[cfg(test)]
#[path = "tests/compositor_tests.rs"]
mod tests;
