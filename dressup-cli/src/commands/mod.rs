pub(crate) mod compose;
pub(crate) mod layout;
pub(crate) mod list;

use std::path::{Path, PathBuf};

use dressup_compositor::StageLayout;

use crate::error::CliError;

/// Load the stage layout from `--layout`, or the config directory.
///
/// An explicit file must be valid. The config-directory file falls back to
/// defaults (with a warning) if it cannot be read or written.
pub(crate) fn load_layout(path: Option<&Path>) -> Result<StageLayout, CliError> {
    match path {
        Some(path) => StageLayout::load_from(path)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        None => match StageLayout::load_or_create() {
            Ok(layout) => Ok(layout),
            Err(e) => {
                log::warn!("Using default stage layout: {}", e);
                Ok(StageLayout::default())
            }
        },
    }
}

/// `--assets` wins over the layout's asset path.
pub(crate) fn asset_root(flag: Option<PathBuf>, layout: &StageLayout) -> PathBuf {
    flag.unwrap_or_else(|| layout.paths.assets.clone())
}
