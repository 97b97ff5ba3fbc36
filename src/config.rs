//! Quest UI settings (TOML)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuestUiError, Result};
use crate::quest::QuestCategory;
use crate::ui::palette::{parse_hex_color, to_hex_color, CategoryPalette};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub category: QuestCategory,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Used for categories without an entry
    pub default: String,
    pub categories: Vec<CategoryColor>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let palette = CategoryPalette::default();
        Self {
            default: to_hex_color(palette.default_color()),
            categories: QuestCategory::ALL
                .iter()
                .filter(|c| palette.color_for(**c) != palette.default_color())
                .map(|c| CategoryColor {
                    category: *c,
                    color: to_hex_color(palette.color_for(*c)),
                })
                .collect(),
        }
    }
}

/// Quest log behaviour while open
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestLogOptions {
    pub pause_on_open: bool,
    pub show_cursor_on_open: bool,
    pub escape_closes: bool,
}

impl Default for QuestLogOptions {
    fn default() -> Self {
        Self {
            pause_on_open: true,
            show_cursor_on_open: true,
            escape_closes: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerOptions {
    /// Trackers drawn on screen before collapsing into "...and N more"
    pub max_visible: usize,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self { max_visible: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestUiConfig {
    pub palette: PaletteConfig,
    pub quest_log: QuestLogOptions,
    pub tracker: TrackerOptions,
}

impl QuestUiConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| QuestUiError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| QuestUiError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // Surface bad colors at load time rather than on first draw
        config.palette()?;
        Ok(config)
    }

    /// Load from the platform settings path, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded quest UI config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Build the category palette described by this config
    pub fn palette(&self) -> Result<CategoryPalette> {
        let mut palette = CategoryPalette::new(parse_hex_color(&self.palette.default)?);
        for entry in &self.palette.categories {
            palette.set(entry.category, parse_hex_color(&entry.color)?);
        }
        Ok(palette)
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("new-aeven").join("quest_ui.toml"))
}

#[cfg(target_os = "android")]
pub fn config_path() -> Option<PathBuf> {
    Some(PathBuf::from("quest_ui.toml"))
}

#[cfg(target_arch = "wasm32")]
pub fn config_path() -> Option<PathBuf> {
    None
}
