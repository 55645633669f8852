use std::path::PathBuf;

use dressup_compositor::StageLayout;

use crate::cli_types::LayoutAction;
use crate::error::CliError;

pub(crate) fn run_layout(action: LayoutAction, explicit: Option<PathBuf>) -> Result<(), CliError> {
    let path = match explicit {
        Some(path) => path,
        None => StageLayout::config_path()
            .ok_or_else(|| CliError::config("Could not determine config directory"))?,
    };

    match action {
        LayoutAction::Path => {
            log::info!("{}", path.display());
        }
        LayoutAction::Show => {
            let layout = if path.exists() {
                StageLayout::load_from(&path)?
            } else {
                log::warn!("{} does not exist; showing defaults", path.display());
                StageLayout::default()
            };
            log::info!("Layout file: {}", path.display());
            log::info!(
                "  Stage: {}x{} on {}",
                layout.stage.width,
                layout.stage.height,
                layout.stage.background
            );
            log::info!(
                "  Thumbnails: {}x{}",
                layout.thumbnail.width,
                layout.thumbnail.height
            );
            log::info!("  Assets: {}", layout.paths.assets.display());
            log::info!("  Screenshots: {}", layout.paths.screenshots.display());
        }
        LayoutAction::Reset => {
            StageLayout::default().save_to(&path)?;
            log::info!("Wrote default layout to {}", path.display());
        }
    }

    Ok(())
}
