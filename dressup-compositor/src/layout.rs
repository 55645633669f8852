use std::path::{Path, PathBuf};

use dressup_core::Size;
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::ComposeError;

/// Stage geometry, picker thumbnail size, and where assets and
/// screenshots live.
///
/// Every section is optional in the YAML file; missing ones take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StageLayout {
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub width: u32,
    pub height: u32,
    /// `#RRGGBB` fill behind the model.
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub assets: PathBuf,
    pub screenshots: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 830,
            height: 700,
            background: "#20B2AA".to_string(),
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 75,
            height: 150,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            screenshots: PathBuf::from("screenshots"),
        }
    }
}

impl StageLayout {
    /// Config file path: `~/.config/dressup/stage-layout.yaml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dressup").join("stage-layout.yaml"))
    }

    /// Load from disk if it exists, otherwise write the default and return it.
    pub fn load_or_create() -> Result<Self, ComposeError> {
        let path = Self::config_path().ok_or_else(|| {
            ComposeError::InvalidLayout("Could not determine config directory".to_string())
        })?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let layout = Self::default();
            layout.save_to(&path)?;
            Ok(layout)
        }
    }

    /// Load and validate a layout from a specific YAML file.
    pub fn load_from(path: &Path) -> Result<Self, ComposeError> {
        let contents = std::fs::read_to_string(path)?;
        let layout: Self = serde_yml::from_str(&contents).map_err(|e| {
            ComposeError::InvalidLayout(format!("Invalid stage layout YAML: {}", e))
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Write the layout to a YAML file.
    pub fn save_to(&self, path: &Path) -> Result<(), ComposeError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yml::to_string(self).map_err(|e| {
            ComposeError::InvalidLayout(format!("Failed to serialize layout: {}", e))
        })?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.stage_size().is_empty() {
            return Err(ComposeError::InvalidLayout(format!(
                "stage must not be empty (got {}x{})",
                self.stage.width, self.stage.height
            )));
        }
        if self.thumbnail_size().is_empty() {
            return Err(ComposeError::InvalidLayout(format!(
                "thumbnail must not be empty (got {}x{})",
                self.thumbnail.width, self.thumbnail.height
            )));
        }
        self.background_color()?;
        Ok(())
    }

    pub fn stage_size(&self) -> Size {
        Size::new(self.stage.width, self.stage.height)
    }

    pub fn thumbnail_size(&self) -> Size {
        Size::new(self.thumbnail.width, self.thumbnail.height)
    }

    pub fn background_color(&self) -> Result<Rgba<u8>, ComposeError> {
        parse_hex_color(&self.stage.background).ok_or_else(|| {
            ComposeError::InvalidLayout(format!(
                "background must be #RRGGBB, got '{}'",
                self.stage.background
            ))
        })
    }
}

/// Parse a hex color string like "#RRGGBB" into an opaque pixel.
pub(crate) fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgba([r, g, b, 255]))
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
