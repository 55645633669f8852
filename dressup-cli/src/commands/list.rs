use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dressup_catalog::build_catalog;

use crate::error::CliError;

pub(crate) fn run_list(root: &Path, category: Option<&str>) -> Result<(), CliError> {
    let catalog = build_catalog(root)?;

    match category {
        Some(name) => {
            let category = catalog
                .find_category(name)
                .ok_or_else(|| CliError::unknown_category(name))?;
            let items = catalog.items(category.as_str()).unwrap_or_default();

            log::info!(
                "{} ({} items):",
                category.if_supports_color(Stdout, |t| t.bold()),
                items.len()
            );
            for item in items {
                log::info!("  {}", item);
            }
        }
        None => {
            log::info!("Wardrobe at {}:", root.display());
            log::info!("");
            for (category, items) in catalog.iter() {
                let layer = match category.layer_rank() {
                    Some(rank) => format!("layer {}", rank + 1),
                    None => "unlayered".to_string(),
                };
                log::info!(
                    "  {} [{}] {} item(s)",
                    category.if_supports_color(Stdout, |t| t.bold()),
                    layer.if_supports_color(Stdout, |t| t.cyan()),
                    items.len()
                );
            }
            log::info!("");
            log::info!(
                "{} categories, {} items",
                catalog.category_count(),
                catalog.item_count()
            );
        }
    }

    Ok(())
}
