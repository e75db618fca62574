use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An uploaded image, stored inline as a data URL.
///
/// Descriptors are replaced wholesale on upload; a half-built descriptor is
/// never merged into a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageDescriptor {
    pub file_name: String,
    pub data_url: String,
    #[serde(default)]
    pub width_px: u32,
    #[serde(default)]
    pub height_px: u32,
    /// Width ÷ height. `None` until the image has been decoded.
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

impl ImageDescriptor {
    /// Landscape images (including square ones) have an aspect ratio ≥ 1.
    pub fn is_landscape(&self) -> bool {
        self.aspect_ratio.is_none_or(|ratio| ratio >= 1.0)
    }
}
