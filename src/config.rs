use egui::Color32;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// File looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "simple_cad.json";

/// Appearance settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Distance in pixels between grid lines
    pub grid_spacing: f32,
    pub stroke_width: f32,
    pub background_color: [u8; 3],
    pub grid_color: [u8; 3],
    pub shape_color: [u8; 3],
    pub preview_color: [u8; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Simple CAD".to_owned(),
            window_size: [800.0, 600.0],
            grid_spacing: 20.0,
            stroke_width: 1.0,
            background_color: [255, 255, 255],
            grid_color: [192, 192, 192],
            shape_color: [0, 0, 0],
            preview_color: [255, 0, 0],
        }
    }
}

impl AppConfig {
    /// Parses a config from JSON text. `path` is only used for error reporting.
    pub fn from_json(json: &str, path: &Path) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config at `path`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load(path: &Path) -> ConfigResult<Option<Self>> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json(&json, path).map(Some)
    }

    /// Loads the config at `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn background_color(&self) -> Color32 {
        rgb(self.background_color)
    }

    pub fn grid_color(&self) -> Color32 {
        rgb(self.grid_color)
    }

    pub fn shape_color(&self) -> Color32 {
        rgb(self.shape_color)
    }

    pub fn preview_color(&self) -> Color32 {
        rgb(self.preview_color)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
