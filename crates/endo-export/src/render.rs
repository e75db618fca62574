use serde::Serialize;
use tera::{Context, Tera};
use tracing::warn;

use endo_core::models::note::NoteData;
use endo_core::models::referral_template::ReferralTemplate;
use endo_notes::referral::tooth_display;

use crate::error::ExportError;

/// Values available to `{{ ... }}` merge fields in letterhead, footer and
/// signature text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeFields {
    pub patient_name: String,
    pub patient_chart_number: String,
    pub patient_dob: String,
    pub date: String,
    /// `#19`, or `#` when no tooth is recorded.
    pub tooth: String,
    pub referring_doctor: String,
    pub doctor_name: String,
    pub credentials: String,
}

impl MergeFields {
    pub fn new(data: &NoteData, template: &ReferralTemplate) -> Self {
        Self {
            patient_name: data.patient_name.clone(),
            patient_chart_number: data.patient_chart_number.clone(),
            patient_dob: data.patient_dob.clone(),
            date: data.date.clone(),
            tooth: tooth_display(data),
            referring_doctor: data.referring_doctor.clone(),
            doctor_name: template.signature.name.clone(),
            credentials: template.signature.credentials.clone(),
        }
    }
}

/// Render a Tera template string against the merge fields.
pub fn render_text(
    template_name: &str,
    template_content: &str,
    fields: &MergeFields,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(fields)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Like [`render_text`], but falls back to the raw text when the template is
/// broken so that layout never fails on a typo in the letterhead.
pub fn render_or_raw(template_name: &str, text: &str, fields: &MergeFields) -> String {
    if !text.contains("{{") && !text.contains("{%") {
        return text.to_string();
    }
    match render_text(template_name, text, fields) {
        Ok(rendered) => rendered,
        Err(error) => {
            warn!(field = template_name, %error, "merge field rendering failed, using raw text");
            text.to_string()
        }
    }
}
