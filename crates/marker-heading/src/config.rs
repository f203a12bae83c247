//! Pipeline and overlay configuration, loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::HeadingParams;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Colors (RGB), radii and widths used by the overlay renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corner_colors: [[u8; 3]; 4],
    pub corner_radius: i32,
    pub centroid_color: [u8; 3],
    pub centroid_radius: i32,
    pub heading_color: [u8; 3],
    pub heading_thickness: u32,
    /// Color of the two triangle legs drawn from the bearing vertex.
    pub bearing_color: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            corner_colors: [[100, 100, 100], [0, 255, 0], [255, 100, 100], [255, 255, 255]],
            corner_radius: 6,
            centroid_color: [255, 0, 0],
            centroid_radius: 5,
            heading_color: [0, 0, 255],
            heading_thickness: 3,
            bearing_color: [0, 255, 0],
        }
    }
}

/// Top-level config file: `{ "heading": {...}, "overlay": {...} }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub heading: HeadingParams,
    pub overlay: OverlayStyle,
}

impl HeadingConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
