use std::path::Path;

use dressup_catalog::build_catalog;
use dressup_compositor::{Canvas, Compositor, StageLayout};
use dressup_core::{AssetPaths, BASE_MODEL_FILE, Category, ItemRef, Size};
use image::{Rgba, RgbaImage};

use super::*;

fn write_png(path: &Path, w: u32, h: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(w, h, Rgba([90, 40, 200, 255]))
        .save(path)
        .unwrap();
}

fn app(root: &Path) -> DressUpApp {
    write_png(&root.join(BASE_MODEL_FILE), 40, 80);
    write_png(&root.join("tops").join("tee.png"), 20, 20);
    write_png(&root.join("tops").join("vest.png"), 30, 10);
    write_png(&root.join("eyes").join("blue.png"), 6, 4);

    let mut layout = StageLayout::default();
    layout.stage.width = 100;
    layout.stage.height = 100;
    layout.paths.screenshots = root.join("screenshots");

    let catalog = build_catalog(root).unwrap();
    let canvas = Canvas::new(layout.stage_size(), layout.background_color().unwrap());
    let compositor = Compositor::new(canvas, AssetPaths::new(root)).unwrap();
    DressUpApp::new(catalog, compositor, layout)
}

#[test]
fn selecting_category_loads_thumbnails() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = egui::Context::default();
    let mut app = app(tmp.path());

    app.select_category(&ctx, Category::new("tops"));

    assert_eq!(app.selected_category, Some(Category::new("tops")));
    assert_eq!(app.thumbnails.len(), 2);
    let thumb = app.thumbnails[&ItemRef::new("tops", "tee")].as_ref().unwrap();
    assert_eq!(thumb.size(), [75, 150]);
}

#[test]
fn thumbnail_size_comes_from_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = egui::Context::default();
    let mut app = app(tmp.path());
    app.layout.thumbnail.width = 100;
    app.layout.thumbnail.height = 100;

    app.select_category(&ctx, Category::new("eyes"));

    let thumb = app.thumbnails[&ItemRef::new("eyes", "blue")].as_ref().unwrap();
    assert_eq!(thumb.size(), [100, 100]);
    assert_eq!(app.layout.thumbnail_size(), Size::new(100, 100));
}

#[test]
fn wearing_marks_stage_dirty_and_refresh_uploads() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = egui::Context::default();
    let mut app = app(tmp.path());
    app.refresh_stage(&ctx);
    assert!(!app.stage_dirty);
    assert_eq!(app.stage_texture.as_ref().map(|t| t.size()), Some([100, 100]));

    app.wear(&ItemRef::new("tops", "tee"));
    assert!(app.stage_dirty);
    assert_eq!(app.compositor.equipped_item("tops"), Some("tee"));

    app.refresh_stage(&ctx);
    assert!(!app.stage_dirty);
}

#[test]
fn missing_item_sets_error_status_only() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = egui::Context::default();
    let mut app = app(tmp.path());
    app.wear(&ItemRef::new("tops", "vest"));
    app.refresh_stage(&ctx);

    app.wear(&ItemRef::new("tops", "cardigan"));

    let status = app.status.clone().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("cardigan.png"));
    assert!(!app.stage_dirty);
    assert_eq!(app.compositor.equipped_item("tops"), Some("vest"));
}

#[test]
fn take_off_and_undress() {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app(tmp.path());
    app.wear(&ItemRef::new("tops", "tee"));
    app.wear(&ItemRef::new("eyes", "blue"));
    app.stage_dirty = false;

    app.take_off(&Category::new("eyes"));
    assert!(app.stage_dirty);
    assert_eq!(app.compositor.outfit().len(), 1);

    app.undress();
    assert!(app.compositor.outfit().is_empty());
}

#[test]
fn screenshot_reports_saved_path() {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app(tmp.path());

    app.take_screenshot();

    let status = app.status.clone().unwrap();
    assert!(!status.is_error, "{}", status.text);
    assert!(tmp.path().join("screenshots").is_dir());
    assert!(status.text.contains("dressup_"));
}
