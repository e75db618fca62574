use tracing::{info, warn};

use endo_core::models::image::ImageDescriptor;
use endo_core::models::note::NoteData;
use endo_core::models::referral_template::ReferralTemplate;

use crate::docx::write_docx;
use crate::error::ExportError;
use crate::images::probe_dimensions;
use crate::layout::{DocumentModel, layout_referral_document};

fn descriptors_mut(template: &mut ReferralTemplate) -> Vec<&mut ImageDescriptor> {
    let mut all: Vec<&mut ImageDescriptor> = Vec::new();
    all.extend(template.header.logo.as_mut());
    all.extend(template.footer.image.as_mut());
    all.extend(template.signature.image.as_mut());
    all.extend(template.radiographs.images.iter_mut().flatten());
    all
}

/// A copy of `template` with every missing aspect ratio probed from the
/// image data. Images that cannot be decoded keep `None` and are laid out
/// with fallback sizes.
pub async fn probe_missing_ratios(template: &ReferralTemplate) -> ReferralTemplate {
    let mut probed = template.clone();
    for image in descriptors_mut(&mut probed) {
        if image.aspect_ratio.is_some() {
            continue;
        }
        match probe_dimensions(&image.data_url).await {
            Ok((width, height)) => {
                image.width_px = width;
                image.height_px = height;
                image.aspect_ratio = Some(f64::from(width) / f64::from(height));
            }
            Err(error) => {
                warn!(file = %image.file_name, %error, "could not probe image, using fallback size");
            }
        }
    }
    probed
}

/// Probe missing image ratios, then lay out the referral document.
pub async fn build_referral_document(
    data: &NoteData,
    template: &ReferralTemplate,
) -> DocumentModel {
    let template = probe_missing_ratios(template).await;
    layout_referral_document(data, &template)
}

/// Build the referral document and serialize it to DOCX bytes.
pub async fn export_referral_docx(
    data: &NoteData,
    template: &ReferralTemplate,
) -> Result<Vec<u8>, ExportError> {
    let model = build_referral_document(data, template).await;
    let bytes = write_docx(&model)?;
    info!(bytes = bytes.len(), "referral document exported");
    Ok(bytes)
}
