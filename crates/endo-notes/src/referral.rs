//! Referral letter generation.
//!
//! The letter is built as structured blocks so the document exporter can
//! style it, and flattened to plain text for the preview and clipboard.
//! Two different bodies exist: a consultation-only letter, and a
//! consultation-plus-treatment letter with a completion section.

use serde::Serialize;

use endo_core::models::diagnosis::ToothDiagnosis;
use endo_core::models::note::NoteData;
use endo_core::models::plan::{CanalMaf, ToothTreatmentPlan};
use endo_core::options::tables::{self, NO_TREATMENT_VALUES};
use endo_core::options::{ClinicalOption, resolve_label, resolve_labels};

use crate::join::join_naturally;

/// Shown in place of any missing date; marks the field as editable.
pub const DATE_PLACEHOLDER: &str = "Click or tap to enter a date.";

pub const CLOSING: &str = "Thank you for the opportunity to participate in the care of your patient. \
Please do not hesitate to contact our office should you have any questions.";

/// Line prefixes rendered in bold by the preview and the document export.
pub const BOLD_LABELS: &[&str] = &[
    "Patient Name:",
    "Patient Chart Number:",
    "Patient DOB:",
    "Date:",
    "Tooth/Area:",
    "Consultation Date:",
    "Treatment Completion Date:",
    "Comments:",
];

/// The bold label a line starts with, if any.
pub fn bold_label_prefix(line: &str) -> Option<&'static str> {
    BOLD_LABELS
        .iter()
        .copied()
        .find(|label| line.starts_with(label))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferralBlocks {
    pub patient_meta: Vec<String>,
    pub salutation: String,
    pub intro_paragraph: String,
    pub tooth_area_line: String,
    pub consultation_lines: Vec<String>,
    /// Empty when no treatment was selected.
    pub completion_lines: Vec<String>,
    pub comments: String,
    pub closing: String,
}

impl ReferralBlocks {
    pub fn comments_line(&self) -> String {
        labelled_line("Comments:", &self.comments)
    }
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn labelled_line(label: &str, value: &str) -> String {
    match present(value) {
        Some(value) => format!("{label} {value}"),
        None => label.to_string(),
    }
}

fn date_line(label: &str, date: &str) -> String {
    format!("{label} {}", present(date).unwrap_or(DATE_PLACEHOLDER))
}

/// The tooth the letter is about: the note's tooth number, else the first
/// diagnosed tooth.
pub fn primary_tooth(data: &NoteData) -> Option<&str> {
    present(&data.tooth_number).or_else(|| {
        data.tooth_diagnoses
            .iter()
            .find_map(|d| present(&d.tooth_number))
    })
}

/// `#19`, or a bare `#` when no tooth has been entered.
pub fn tooth_display(data: &NoteData) -> String {
    format!("#{}", primary_tooth(data).unwrap_or_default())
}

pub fn primary_diagnosis(data: &NoteData) -> Option<&ToothDiagnosis> {
    let tooth = primary_tooth(data);
    data.tooth_diagnoses
        .iter()
        .find(|d| tooth.is_some() && present(&d.tooth_number) == tooth)
        .or_else(|| data.tooth_diagnoses.iter().find(|d| d.has_tooth_number()))
        .or_else(|| data.tooth_diagnoses.first())
}

/// The treatment the letter reports: the primary plan's first performed
/// treatment, else the note-level performed treatment, else the first option
/// offered, else the primary diagnosis's recommendation.
pub fn resolved_treatment(data: &NoteData) -> Option<&str> {
    primary_plan(data)
        .and_then(|plan| plan.treatment_performed.iter().find_map(|t| present(t)))
        .or_else(|| present(&data.treatment_performed))
        .or_else(|| {
            data.treatment_options_offered
                .iter()
                .find_map(|t| present(t))
        })
        .or_else(|| primary_diagnosis(data).and_then(|d| present(&d.recommended_treatment)))
}

/// Whether the letter includes a treatment completion section.
pub fn has_treatment_selected(data: &NoteData) -> bool {
    resolved_treatment(data).is_some_and(|t| !NO_TREATMENT_VALUES.contains(&t))
}

pub fn build_referral_blocks(data: &NoteData, include_post_op: bool) -> ReferralBlocks {
    let tooth = tooth_display(data);
    let treated = has_treatment_selected(data);
    let patient = present(&data.patient_name).unwrap_or("your patient");

    let patient_meta = vec![
        labelled_line("Patient Name:", &data.patient_name),
        labelled_line("Patient Chart Number:", &data.patient_chart_number),
        date_line("Patient DOB:", &data.patient_dob),
        date_line("Date:", &data.date),
    ];

    let salutation = match present(&data.referring_doctor) {
        Some(doctor) if doctor.starts_with("Dr") => format!("Dear {doctor},"),
        Some(doctor) => format!("Dear Dr. {doctor},"),
        None => "Dear Doctor,".to_string(),
    };

    let intro_paragraph = if treated {
        format!(
            "Thank you for referring {patient} to our office for evaluation and treatment of \
             tooth {tooth}. Endodontic treatment has been completed, and a summary of our \
             findings and the treatment provided is outlined below."
        )
    } else {
        format!(
            "Thank you for referring {patient} to our office for an endodontic consultation \
             regarding tooth {tooth}. A summary of our findings and recommendations is \
             outlined below."
        )
    };

    let comments = match present(&data.referral_comments) {
        Some(comments) => comments.to_string(),
        None => format!("Please proceed with final restoration for Tooth {tooth}."),
    };

    ReferralBlocks {
        patient_meta,
        salutation,
        intro_paragraph,
        tooth_area_line: format!("Tooth/Area: {tooth}"),
        consultation_lines: consultation_lines(data),
        completion_lines: if treated {
            completion_lines(data, include_post_op)
        } else {
            Vec::new()
        },
        comments,
        closing: CLOSING.to_string(),
    }
}

fn consultation_lines(data: &NoteData) -> Vec<String> {
    let mut lines = vec![date_line("Consultation Date:", &data.consultation_date)];
    let Some(diagnosis) = primary_diagnosis(data) else {
        return lines;
    };

    let label = |options: &[ClinicalOption], value: &str| {
        present(value).map(|v| resolve_label(options, v))
    };
    let diagnoses: Vec<String> = [
        label(tables::PULPAL_DIAGNOSES, &diagnosis.pulpal_diagnosis),
        label(tables::PERIAPICAL_DIAGNOSES, &diagnosis.periapical_diagnosis),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !diagnoses.is_empty() {
        lines.push(format!("Diagnosis: {}", diagnoses.join("; ")));
    }
    if let Some(prognosis) = label(tables::PROGNOSES, &diagnosis.prognosis) {
        lines.push(format!("Prognosis: {prognosis}"));
    }
    if let Some(treatment) = label(tables::TREATMENTS, &diagnosis.recommended_treatment) {
        lines.push(format!("Recommended Treatment: {treatment}"));
    }
    lines
}

fn completion_lines(data: &NoteData, include_post_op: bool) -> Vec<String> {
    let mut lines = vec![date_line(
        "Treatment Completion Date:",
        &data.treatment_completion_date,
    )];

    if let Some(treatment) = resolved_treatment(data) {
        lines.push(format!(
            "Treatment: {}",
            resolve_label(tables::TREATMENTS, treatment)
        ));
    }

    let plan = primary_plan(data);
    if let Some(summary) = plan.and_then(canal_summary) {
        lines.push(summary);
    }
    if let Some(restoration) = plan.and_then(|p| present(&p.restoration)) {
        lines.push(format!(
            "Restoration: {}",
            resolve_label(tables::RESTORATIONS, restoration)
        ));
    }

    if include_post_op {
        let instructions = resolve_labels(tables::POST_OP_INSTRUCTIONS, &data.post_op_instructions);
        if !instructions.is_empty() {
            lines.push(format!(
                "Post-Operative Instructions: {}",
                instructions.join("; ")
            ));
        }
    }
    lines
}

fn primary_plan(data: &NoteData) -> Option<&ToothTreatmentPlan> {
    let tooth = primary_tooth(data);
    data.tooth_treatment_plans
        .iter()
        .find(|p| tooth.is_some() && present(&p.tooth_number) == tooth)
        .or_else(|| data.tooth_treatment_plans.first())
}

/// `{n} canal(s) instrumented with {system} and obturated with
/// {materials}[ using {technique}][ and {sealer}].`
pub fn canal_summary(plan: &ToothTreatmentPlan) -> Option<String> {
    if plan.suppresses_canal_detail() {
        return None;
    }

    // A configuration that names no canals (`other` without custom names)
    // counts the stored records instead.
    let names = plan.valid_canal_names();
    let (count, mafs): (usize, Vec<&CanalMaf>) = if names.is_empty() {
        (plan.canal_mafs.len(), plan.canal_mafs.iter().collect())
    } else {
        (names.len(), plan.current_canal_mafs())
    };
    if count == 0 {
        return None;
    }

    let systems = unique_labels(
        tables::FILE_SYSTEMS,
        mafs.iter().flat_map(|m| m.file_system.iter()),
    );
    let materials = unique_labels(
        tables::OBTURATION_MATERIALS,
        mafs.iter().map(|m| &m.obturation_material),
    );
    let techniques = unique_labels(
        tables::OBTURATION_TECHNIQUES,
        mafs.iter().map(|m| &m.obturation_technique),
    );
    let sealers = unique_labels(tables::SEALERS, mafs.iter().map(|m| &m.obturation_sealer));

    let mut clauses = Vec::new();
    if !systems.is_empty() {
        clauses.push(format!("instrumented with {}", join_naturally(&systems)));
    }
    if !(materials.is_empty() && techniques.is_empty() && sealers.is_empty()) {
        let mut obturated = String::from("obturated");
        if !materials.is_empty() {
            obturated.push_str(&format!(" with {}", join_naturally(&materials)));
        }
        if !techniques.is_empty() {
            obturated.push_str(&format!(" using {}", join_naturally(&techniques)));
        }
        if !sealers.is_empty() {
            obturated.push_str(&format!(" and {}", join_naturally(&sealers)));
        }
        clauses.push(obturated);
    }

    let noun = if count == 1 { "canal" } else { "canals" };
    Some(if clauses.is_empty() {
        format!("{count} {noun} treated.")
    } else {
        format!("{count} {noun} {}.", clauses.join(" and "))
    })
}

fn unique_labels<'a>(
    options: &[ClinicalOption],
    values: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for value in values.filter_map(|v| present(v)) {
        let label = resolve_label(options, value);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Flatten blocks into the plain-text letter layout.
pub fn render_referral_letter(blocks: &ReferralBlocks) -> String {
    let mut sections: Vec<String> = vec![
        blocks.patient_meta.join("\n"),
        blocks.salutation.clone(),
        blocks.intro_paragraph.clone(),
        blocks.tooth_area_line.clone(),
        blocks.consultation_lines.join("\n"),
    ];
    if !blocks.completion_lines.is_empty() {
        sections.push(blocks.completion_lines.join("\n"));
    }
    sections.push(blocks.comments_line());
    sections.push(blocks.closing.clone());
    sections.join("\n\n")
}

/// The plain-text referral letter, without post-operative instructions.
pub fn generate_referral_letter(data: &NoteData) -> String {
    render_referral_letter(&build_referral_blocks(data, false))
}
