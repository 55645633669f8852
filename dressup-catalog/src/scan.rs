//! Asset directory scanner.
//!
//! Every immediate subdirectory of the asset root is a category; every
//! `.png` file inside it is an item named after its file stem.

use std::path::{Path, PathBuf};

use dressup_core::{Category, ITEM_EXTENSION};
use thiserror::Error;

use crate::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Asset directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Asset path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Scan `root` and build the wardrobe catalog.
///
/// A missing root is an error. Plain files at the root (such as the base
/// model image) are ignored, and a category without images maps to an
/// empty list. A category directory that cannot be read is logged and
/// treated as empty.
pub fn build_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    if !root.exists() {
        return Err(CatalogError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|e| CatalogError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut catalog = Catalog::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping category with non-UTF-8 name: {}", path.display());
            continue;
        };

        let items = match collect_item_names(&path) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Could not read category {}: {}", path.display(), e);
                Vec::new()
            }
        };
        log::debug!("Category {}: {} item(s)", name, items.len());
        catalog.insert(Category::new(name), items);
    }

    Ok(catalog)
}

/// Stems of the item images directly inside `dir`, sorted.
fn collect_item_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if !path.is_file() || !is_item_image(&path) {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => names.push(stem.to_string()),
            None => log::warn!("Skipping item with non-UTF-8 name: {}", path.display()),
        }
    }
    names.sort();
    Ok(names)
}

fn is_item_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ITEM_EXTENSION))
}
