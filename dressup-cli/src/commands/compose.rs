use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dressup_catalog::{Catalog, build_catalog};
use dressup_compositor::{Canvas, ComposeError, Compositor, StageLayout};
use dressup_core::{AssetPaths, Category, ItemRef};

use crate::error::CliError;

pub(crate) fn run_compose(
    layout: &StageLayout,
    root: &Path,
    wear: &[ItemRef],
    output: Option<PathBuf>,
    screenshots: Option<PathBuf>,
) -> Result<(), CliError> {
    // Fail before touching the stage if the wardrobe is missing.
    let catalog = build_catalog(root)?;

    let canvas = Canvas::new(layout.stage_size(), layout.background_color()?);
    let mut compositor = Compositor::new(canvas, AssetPaths::new(root))?;

    for item in wear {
        let category = resolve_category(&catalog, &item.category);
        match compositor.equip(&category, &item.name) {
            Ok(()) => log::info!(
                "Wearing {} {}",
                category.if_supports_color(Stdout, |t| t.bold()),
                item.name
            ),
            Err(ComposeError::AssetMissing { path, .. }) => {
                log::warn!("Image file not found: {}", path.display());
            }
            Err(e) => log::warn!("Could not wear {}: {}", item, e),
        }
    }

    let order: Vec<String> = compositor
        .draw_order()
        .iter()
        .map(|c| c.to_string())
        .collect();
    if order.is_empty() {
        log::info!("Nothing worn; saving the base model only");
    } else {
        log::info!("Draw order (back to front): {}", order.join(", "));
    }

    match output {
        Some(path) => compositor.save_capture(&path)?,
        None => {
            let dir = screenshots.unwrap_or_else(|| layout.paths.screenshots.clone());
            compositor.save_screenshot(&dir)?;
        }
    }

    Ok(())
}

/// Map a requested category onto the wardrobe's spelling of it, ignoring case.
/// Unknown categories pass through so the equip reports the missing file.
fn resolve_category(catalog: &Catalog, requested: &Category) -> Category {
    catalog
        .find_category(requested.as_str())
        .cloned()
        .unwrap_or_else(|| requested.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dressup_catalog::CatalogError;
    use dressup_core::BASE_MODEL_FILE;
    use image::{Rgba, RgbaImage};

    const SKIN: Rgba<u8> = Rgba([230, 190, 160, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn write_png(path: &Path, w: u32, h: u32, color: Rgba<u8>) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(w, h, color).save(path).unwrap();
    }

    /// Base model 40x80 plus a 20x20 `tops/tee`.
    fn wardrobe(root: &Path) {
        write_png(&root.join(BASE_MODEL_FILE), 40, 80, SKIN);
        write_png(&root.join("tops").join("tee.png"), 20, 20, BLUE);
    }

    fn pngs_in(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".png"))
            .collect()
    }

    #[test]
    fn missing_asset_root_is_catalog_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_compose(
            &StageLayout::default(),
            &tmp.path().join("nope"),
            &[],
            Some(tmp.path().join("out.png")),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Catalog(CatalogError::RootNotFound(_))
        ));
        assert!(!tmp.path().join("out.png").exists());
    }

    #[test]
    fn missing_base_model_is_compose_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_compose(&StageLayout::default(), tmp.path(), &[], None, None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Compose(ComposeError::BaseModelMissing(_))
        ));
    }

    #[test]
    fn missing_items_are_skipped_and_output_written() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("assets");
        wardrobe(&root);
        let output = tmp.path().join("out").join("look.png");
        let wear = [
            ItemRef::new("TOPS", "tee"),
            ItemRef::new("tops", "ghost"),
            ItemRef::new("EYES", "blue"),
        ];

        run_compose(&StageLayout::default(), &root, &wear, Some(output.clone()), None).unwrap();

        let saved = image::open(&output).unwrap().into_rgba8();
        assert_eq!(saved.dimensions(), (40, 80));
        assert_eq!(*saved.get_pixel(0, 0), SKIN);
        // tee centered at (10, 30)
        assert_eq!(*saved.get_pixel(20, 40), BLUE);
    }

    #[test]
    fn screenshot_goes_to_requested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("assets");
        wardrobe(&root);
        let dir = tmp.path().join("shots");

        run_compose(
            &StageLayout::default(),
            &root,
            &[ItemRef::new("tops", "tee")],
            None,
            Some(dir.clone()),
        )
        .unwrap();

        let names = pngs_in(&dir);
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("dressup_"), "{}", names[0]);
    }

    #[test]
    fn screenshot_defaults_to_layout_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("assets");
        wardrobe(&root);
        let mut layout = StageLayout::default();
        layout.paths.screenshots = tmp.path().join("from-layout");

        run_compose(&layout, &root, &[], None, None).unwrap();

        assert_eq!(pngs_in(&layout.paths.screenshots).len(), 1);
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(Category::new("TOPS"), vec!["tee".to_string()]);
        catalog.insert(Category::new("Lips"), Vec::new());
        catalog
    }

    #[test]
    fn resolves_category_case_insensitively() {
        let catalog = catalog();
        assert_eq!(
            resolve_category(&catalog, &Category::new("tops")),
            Category::new("TOPS")
        );
        assert_eq!(
            resolve_category(&catalog, &Category::new("LIPS")),
            Category::new("Lips")
        );
    }

    #[test]
    fn unknown_category_passes_through() {
        let catalog = catalog();
        assert_eq!(
            resolve_category(&catalog, &Category::new("CAPES")),
            Category::new("CAPES")
        );
    }
}
