use std::collections::HashMap;

use egui::load::SizedTexture;

use dressup_catalog::Catalog;
use dressup_core::{Category, ItemRef};

/// What the user asked for in the wardrobe panel this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WardrobeAction {
    SelectCategory(Category),
    Wear(ItemRef),
    TakeOff(Category),
}

const FOOTER_HEIGHT: f32 = 48.0;

/// Render the wardrobe panel: category list on top, item thumbnails below.
///
/// Categories with something worn are marked; right-clicking one takes the
/// item off.
pub fn show(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    selected: Option<&Category>,
    thumbnails: &HashMap<ItemRef, Option<egui::TextureHandle>>,
    is_worn: impl Fn(&Category) -> bool,
) -> Option<WardrobeAction> {
    let mut action = None;

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.heading("Wardrobe Items");
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("categories")
        .max_height(200.0)
        .show(ui, |ui| {
            for category in catalog.categories() {
                let worn = is_worn(category);
                let label = if worn {
                    format!("{}  \u{25CF}", category)
                } else {
                    category.to_string()
                };
                let response = ui.add_sized(
                    [ui.available_width(), 24.0],
                    egui::SelectableLabel::new(selected == Some(category), label),
                );
                if response.clicked() {
                    action = Some(WardrobeAction::SelectCategory(category.clone()));
                }
                if worn && response.secondary_clicked() {
                    action = Some(WardrobeAction::TakeOff(category.clone()));
                }
            }
        });
    ui.separator();

    let items_height = (ui.available_height() - FOOTER_HEIGHT).max(0.0);
    egui::ScrollArea::vertical()
        .id_salt("items")
        .max_height(items_height)
        .show(ui, |ui| {
            let Some(category) = selected else {
                ui.label("Select a category to see its items.");
                return;
            };
            let items = catalog.items(category.as_str()).unwrap_or_default();
            if items.is_empty() {
                ui.label("No items in this category.");
                return;
            }

            egui::Grid::new("item_grid")
                .num_columns(2)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    for (i, name) in items.iter().enumerate() {
                        let item = ItemRef::new(category.clone(), name.clone());
                        ui.vertical(|ui| {
                            match thumbnails.get(&item) {
                                Some(Some(texture)) => {
                                    let image = egui::Image::new(SizedTexture::from_handle(texture));
                                    if ui.add(egui::ImageButton::new(image)).clicked() {
                                        action = Some(WardrobeAction::Wear(item.clone()));
                                    }
                                }
                                _ => {
                                    ui.add_enabled(false, egui::Button::new("missing"));
                                }
                            }
                            ui.label(name);
                        });
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.heading("You are beautiful!");
    });

    action
}
