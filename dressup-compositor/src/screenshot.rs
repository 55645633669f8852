//! Screenshot export: `dressup_<YYYYMMDD-HHMMSS>.png` in a screenshot directory.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use image::RgbaImage;

use crate::ComposeError;

/// File name for a screenshot taken at `time`.
pub fn screenshot_file_name<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("dressup_{}.png", time.format("%Y%m%d-%H%M%S"))
}

/// Write `image` into `dir` under a local-time stamped name, creating `dir`
/// if needed. Returns the written path.
///
/// Two screenshots within the same second share a name; the later one wins.
pub fn save_screenshot(image: &RgbaImage, dir: &Path) -> Result<PathBuf, ComposeError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(screenshot_file_name(&Local::now()));
    image.save(&path)?;
    log::info!("Screenshot saved as {}", path.display());
    Ok(path)
}
