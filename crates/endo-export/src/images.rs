//! Image loading and probing.
//!
//! Uploaded images are stored inline as base64 data URLs. Decoding happens
//! on the blocking pool; a descriptor is only handed back once it is
//! complete, so a failed upload never leaves a half-filled slot behind.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{GenericImageView, ImageFormat};
use tracing::info;

use endo_core::models::image::ImageDescriptor;
use endo_core::models::referral_template::ReferralTemplate;

use crate::error::ExportError;

/// Where an uploaded image goes in a [`ReferralTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Logo,
    Footer,
    Signature,
    Radiograph(usize),
}

pub fn mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::Bmp) => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(bytes), STANDARD.encode(bytes))
}

pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, ExportError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::InvalidDataUrl("missing data: scheme".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::InvalidDataUrl("missing payload".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(ExportError::InvalidDataUrl(
            "only base64 data URLs are supported".to_string(),
        ));
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| ExportError::InvalidDataUrl(e.to_string()))
}

/// Natural pixel dimensions of an encoded image.
pub fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), ExportError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ExportError::ImageDecode(format!("failed to decode image: {e}")))?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::ImageDecode("image has no pixels".to_string()));
    }
    Ok((width, height))
}

async fn decode_dimensions(bytes: Vec<u8>) -> Result<(u32, u32), ExportError> {
    tokio::task::spawn_blocking(move || image_dimensions(&bytes))
        .await
        .map_err(|e| ExportError::ImageDecode(e.to_string()))?
}

/// Read an image file into a complete descriptor.
pub async fn load_image_descriptor(path: impl AsRef<Path>) -> Result<ImageDescriptor, ExportError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ExportError::ImageRead {
            path: path.display().to_string(),
            source,
        })?;

    let data_url = encode_data_url(&bytes);
    let (width_px, height_px) = decode_dimensions(bytes).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!(file = %file_name, width_px, height_px, "image loaded");
    Ok(ImageDescriptor {
        file_name,
        data_url,
        width_px,
        height_px,
        aspect_ratio: Some(f64::from(width_px) / f64::from(height_px)),
    })
}

/// Pixel dimensions of an image stored as a data URL.
pub async fn probe_dimensions(data_url: &str) -> Result<(u32, u32), ExportError> {
    let bytes = decode_data_url(data_url)?;
    decode_dimensions(bytes).await
}

/// Width ÷ height of an image stored as a data URL.
pub async fn probe_aspect_ratio(data_url: &str) -> Result<f64, ExportError> {
    let (width, height) = probe_dimensions(data_url).await?;
    Ok(f64::from(width) / f64::from(height))
}

/// Load the image at `path` into `slot`. On failure the template is left
/// exactly as it was.
pub async fn attach_image(
    template: &mut ReferralTemplate,
    slot: ImageSlot,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let descriptor = load_image_descriptor(path).await?;
    match slot {
        ImageSlot::Logo => template.header.logo = Some(descriptor),
        ImageSlot::Footer => template.footer.image = Some(descriptor),
        ImageSlot::Signature => template.signature.image = Some(descriptor),
        ImageSlot::Radiograph(index) => template.set_radiograph(index, descriptor),
    }
    Ok(())
}

/// Empty `slot`. Radiograph slots stay in the grid as placeholders.
pub fn clear_image(template: &mut ReferralTemplate, slot: ImageSlot) {
    match slot {
        ImageSlot::Logo => template.header.logo = None,
        ImageSlot::Footer => template.footer.image = None,
        ImageSlot::Signature => template.signature.image = None,
        ImageSlot::Radiograph(index) => template.clear_radiograph(index),
    }
    info!(?slot, "image cleared");
}
