//! Presentation settings for the exported referral document.
//!
//! Orthogonal to clinical data; persisted separately from notes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::image::ImageDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReferralTemplate {
    pub margins: Margins,
    pub font_family: String,
    /// Body text size in points.
    pub body_font_size_pt: f64,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
    pub signature: SignatureConfig,
    pub radiographs: RadiographConfig,
    /// Append post-operative instructions to the completion section.
    pub include_post_op: bool,
}

impl Default for ReferralTemplate {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            font_family: "Calibri".to_string(),
            body_font_size_pt: 11.0,
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
            signature: SignatureConfig::default(),
            radiographs: RadiographConfig::default(),
            include_post_op: false,
        }
    }
}

impl ReferralTemplate {
    /// Store an uploaded radiograph in `slot`, growing the slot list if
    /// needed. The descriptor replaces whatever was there.
    pub fn set_radiograph(&mut self, slot: usize, image: ImageDescriptor) {
        let images = &mut self.radiographs.images;
        if images.len() <= slot {
            images.resize(slot + 1, None);
        }
        images[slot] = Some(image);
        if self.radiographs.slots < images.len() {
            self.radiographs.slots = images.len();
        }
    }

    pub fn clear_radiograph(&mut self, slot: usize) {
        if let Some(image) = self.radiographs.images.get_mut(slot) {
            *image = None;
        }
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 0.75,
            right: 0.75,
            bottom: 0.75,
            left: 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HeaderLayout {
    #[default]
    SingleColumn,
    LogoLeftTextRight,
    StackedCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct HeaderConfig {
    pub layout: HeaderLayout,
    pub logo: Option<ImageDescriptor>,
    /// Logo width in inches; the height follows the logo's aspect ratio.
    pub logo_width_in: f64,
    pub lines: Vec<HeaderLine>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            layout: HeaderLayout::SingleColumn,
            logo: None,
            logo_width_in: 1.5,
            lines: Vec::new(),
        }
    }
}

/// One line of practice letterhead. May contain `{{ ... }}` merge fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct HeaderLine {
    pub text: String,
    pub bold: bool,
    pub size_pt: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FooterImagePosition {
    Above,
    #[default]
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FooterConfig {
    pub text: String,
    pub image: Option<ImageDescriptor>,
    pub image_width_in: f64,
    pub image_position: FooterImagePosition,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            image: None,
            image_width_in: 2.0,
            image_position: FooterImagePosition::Below,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SignatureConfig {
    pub closing: String,
    pub name: String,
    pub credentials: String,
    pub image: Option<ImageDescriptor>,
    pub image_width_in: f64,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            closing: "Sincerely,".to_string(),
            name: String::new(),
            credentials: String::new(),
            image: None,
            image_width_in: 1.75,
        }
    }
}

/// Grid of radiograph slots placed after the letter body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RadiographConfig {
    pub slots: usize,
    pub columns: usize,
    /// Per-slot image; `None` renders an empty placeholder.
    pub images: Vec<Option<ImageDescriptor>>,
}

impl Default for RadiographConfig {
    fn default() -> Self {
        Self {
            slots: 2,
            columns: 2,
            images: Vec::new(),
        }
    }
}
