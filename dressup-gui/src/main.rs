//! dressup GUI
//!
//! Pick a category, click an item, and it is layered onto the model.

use std::path::PathBuf;

use dressup_catalog::build_catalog;
use dressup_compositor::{Canvas, Compositor, StageLayout};
use dressup_core::AssetPaths;
use dressup_gui::DressUpApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = match StageLayout::load_or_create() {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("Using default stage layout: {}", e);
            StageLayout::default()
        }
    };

    // Optional first argument overrides the asset directory.
    let root = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| layout.paths.assets.clone());

    // Nothing is shown unless the wardrobe and base model load.
    let catalog = match build_catalog(&root) {
        Ok(catalog) => catalog,
        Err(e) => fail(&e.to_string()),
    };
    let background = match layout.background_color() {
        Ok(color) => color,
        Err(e) => fail(&e.to_string()),
    };
    let canvas = Canvas::new(layout.stage_size(), background);
    let compositor = match Compositor::new(canvas, AssetPaths::new(&root)) {
        Ok(compositor) => compositor,
        Err(e) => fail(&e.to_string()),
    };
    log::info!(
        "Loaded {} categories, {} items from {}",
        catalog.category_count(),
        catalog.item_count(),
        root.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_title("Dress-Up Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Dress-Up Game",
        options,
        Box::new(move |_cc| Ok(Box::new(DressUpApp::new(catalog, compositor, layout)))),
    )
}

fn fail(message: &str) -> ! {
    log::error!("{}", message);
    std::process::exit(1);
}
