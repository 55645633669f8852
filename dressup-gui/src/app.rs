use std::collections::HashMap;

use dressup_catalog::Catalog;
use dressup_compositor::{Canvas, ComposeError, Compositor, StageLayout, load_thumbnail};
use dressup_core::{Category, ItemRef};

use crate::textures;
use crate::widgets;
use crate::widgets::wardrobe::WardrobeAction;

/// One-line feedback shown above the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct DressUpApp {
    /// Wardrobe contents, scanned once at startup.
    pub catalog: Catalog,

    /// Owns the stage and everything worn on it.
    pub compositor: Compositor<Canvas>,

    pub layout: StageLayout,

    /// Category whose items are shown in the picker.
    pub selected_category: Option<Category>,

    /// Picker thumbnails; `None` marks an item whose image failed to load.
    pub thumbnails: HashMap<ItemRef, Option<egui::TextureHandle>>,

    /// Flattened stage as uploaded to egui.
    pub stage_texture: Option<egui::TextureHandle>,

    /// Set when the stage changed since the last upload.
    pub stage_dirty: bool,

    pub status: Option<Status>,
}

impl DressUpApp {
    pub fn new(catalog: Catalog, compositor: Compositor<Canvas>, layout: StageLayout) -> Self {
        Self {
            catalog,
            compositor,
            layout,
            selected_category: None,
            thumbnails: HashMap::new(),
            stage_texture: None,
            stage_dirty: true,
            status: None,
        }
    }

    /// Show a category's items, loading any thumbnails not seen before.
    pub fn select_category(&mut self, ctx: &egui::Context, category: Category) {
        let items: Vec<String> = self
            .catalog
            .items(category.as_str())
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        let size = self.layout.thumbnail_size();

        for item in items {
            let key = ItemRef::new(category.clone(), item);
            if self.thumbnails.contains_key(&key) {
                continue;
            }
            let texture = match load_thumbnail(self.compositor.assets(), &category, &key.name, size)
            {
                Ok(image) => Some(ctx.load_texture(
                    format!("thumb/{}", key),
                    textures::to_color_image(&image),
                    egui::TextureOptions::LINEAR,
                )),
                Err(ComposeError::AssetMissing { path, .. }) => {
                    log::warn!("Image file not found: {}", path.display());
                    None
                }
                Err(e) => {
                    log::warn!("Could not load thumbnail for {}: {}", key, e);
                    None
                }
            };
            self.thumbnails.insert(key, texture);
        }

        self.selected_category = Some(category);
    }

    /// Put an item on. A missing image is reported and changes nothing.
    pub fn wear(&mut self, item: &ItemRef) {
        match self.compositor.equip(&item.category, &item.name) {
            Ok(()) => {
                self.stage_dirty = true;
                self.status = None;
            }
            Err(ComposeError::AssetMissing { path, .. }) => {
                log::warn!("Image file not found: {}", path.display());
                self.status = Some(Status::error(format!(
                    "Image file not found: {}",
                    path.display()
                )));
            }
            Err(e) => {
                log::warn!("Could not wear {}: {}", item, e);
                self.status = Some(Status::error(format!("Could not wear {}: {}", item, e)));
            }
        }
    }

    pub fn take_off(&mut self, category: &Category) {
        if self.compositor.unequip(category.as_str()).is_some() {
            self.stage_dirty = true;
        }
    }

    pub fn undress(&mut self) {
        self.compositor.clear();
        self.stage_dirty = true;
        self.status = None;
    }

    /// Save the model region to the screenshot directory.
    pub fn take_screenshot(&mut self) {
        let dir = self.layout.paths.screenshots.clone();
        self.status = Some(match self.compositor.save_screenshot(&dir) {
            Ok(path) => Status::info(format!("Screenshot saved as {}", path.display())),
            Err(e) => {
                log::error!("Screenshot failed: {}", e);
                Status::error(format!("Screenshot failed: {}", e))
            }
        });
    }

    /// Re-upload the flattened stage if anything changed.
    pub fn refresh_stage(&mut self, ctx: &egui::Context) {
        if !self.stage_dirty {
            return;
        }
        match self.compositor.surface().render() {
            Ok(image) => {
                textures::upload(ctx, &mut self.stage_texture, "stage", &image);
                self.stage_dirty = false;
            }
            Err(e) => {
                log::error!("Could not render stage: {}", e);
                self.status = Some(Status::error(format!("Could not render stage: {}", e)));
                self.stage_dirty = false;
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: WardrobeAction) {
        match action {
            WardrobeAction::SelectCategory(category) => self.select_category(ctx, category),
            WardrobeAction::Wear(item) => self.wear(&item),
            WardrobeAction::TakeOff(category) => self.take_off(&category),
        }
    }
}

impl eframe::App for DressUpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_stage(ctx);

        let wardrobe_action = egui::SidePanel::left("wardrobe")
            .resizable(false)
            .exact_width(250.0)
            .show(ctx, |ui| {
                widgets::wardrobe::show(
                    ui,
                    &self.catalog,
                    self.selected_category.as_ref(),
                    &self.thumbnails,
                    |category| self.compositor.equipped_item(category.as_str()).is_some(),
                )
            })
            .inner;
        if let Some(action) = wardrobe_action {
            self.apply(ctx, action);
        }

        let background = self
            .layout
            .background_color()
            .map(|c| egui::Color32::from_rgb(c[0], c[1], c[2]))
            .unwrap_or(egui::Color32::DARK_GRAY);
        let stage_action = egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| {
                widgets::stage::show(ui, self.stage_texture.as_ref(), self.status.as_ref())
            })
            .inner;

        match stage_action {
            Some(widgets::stage::StageAction::Screenshot) => self.take_screenshot(),
            Some(widgets::stage::StageAction::Undress) => self.undress(),
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
