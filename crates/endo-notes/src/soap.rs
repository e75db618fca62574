//! SOAP note generation.
//!
//! The note is four sections, each a header followed by paragraphs separated
//! by blank lines. Every fragment is optional; a fragment whose source fields
//! are empty is left out entirely, headings included. History, Chief Complaint
//! and the assessment fall back to a fixed sentence.

use endo_core::models::diagnosis::ToothDiagnosis;
use endo_core::models::note::NoteData;
use endo_core::models::plan::{CanalMaf, ToothTreatmentPlan};
use endo_core::options::tables::{self, OTHER_COMPLAINT, OTHER_CONFIGURATION_LABEL};
use endo_core::options::{ClinicalOption, lookup, resolve_label, resolve_labels};

use crate::consent::CONSENT_TEXT;
use crate::join::join_naturally;

pub const NO_HISTORY: &str = "No history reported.";
pub const NO_CHIEF_COMPLAINT: &str = "No chief complaint reported.";
pub const ASSESSMENT_PENDING: &str = "Assessment pending.";
pub const CONTINUING_TREATMENT: &str = "Patient presents for continuation of endodontic treatment.";

const NONE: &str = "none";

/// Render the complete SOAP note for `data`.
pub fn generate_soap_note(data: &NoteData) -> String {
    let sections = [
        ("SUBJECTIVE:", subjective(data)),
        ("OBJECTIVE:", objective(data)),
        ("ASSESSMENT:", assessment(data)),
        ("PLAN:", plan(data)),
    ];

    sections
        .iter()
        .map(|(header, paragraphs)| {
            if paragraphs.is_empty() {
                header.to_string()
            } else {
                format!("{header}\n\n{}", paragraphs.join("\n\n"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn headed(heading: &str, body: &str) -> String {
    format!("{heading}\n\n{body}")
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Free text is kept verbatim, but only if it has visible content.
fn free_text(value: &str) -> Option<&str> {
    present(value).map(|_| value)
}

fn labelled(label: &str, options: &[ClinicalOption], value: &str) -> Option<String> {
    present(value).map(|v| format!("{label}: {}", resolve_label(options, v)))
}

fn labelled_list(label: &str, labels: &[String], separator: &str) -> Option<String> {
    (!labels.is_empty()).then(|| format!("{label}: {}", labels.join(separator)))
}

fn without_none(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| *v != NONE)
        .collect()
}

fn lowercase(labels: Vec<String>) -> Vec<String> {
    labels.into_iter().map(|l| l.to_lowercase()).collect()
}

// Subjective

fn subjective(data: &NoteData) -> Vec<String> {
    let history = history(data);
    let complaint = chief_complaint(data);
    vec![
        headed("History:", history.as_deref().unwrap_or(NO_HISTORY)),
        headed(
            "Chief Complaint:",
            complaint.as_deref().unwrap_or(NO_CHIEF_COMPLAINT),
        ),
    ]
}

fn history(data: &NoteData) -> Option<String> {
    let vitals: Vec<String> = [
        present(&data.blood_pressure).map(|v| format!("BP: {v} mmHg")),
        present(&data.pulse).map(|v| format!("Pulse: {v} bpm")),
        present(&data.respiratory_rate).map(|v| format!("RR: {v} breaths/min unlaboured")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut history = vitals.join(", ");

    if data.is_first_visit() {
        let alerts = resolve_labels(tables::MEDICAL_ALERTS, &without_none(&data.medical_alerts));
        if !alerts.is_empty() {
            if !history.is_empty() {
                history.push_str(". ");
            }
            history.push_str(&format!(
                "Medical history significant for {}.",
                join_naturally(&lowercase(alerts))
            ));
        }
    }

    (!history.is_empty()).then_some(history)
}

fn chief_complaint(data: &NoteData) -> Option<String> {
    let mut sentences = Vec::new();

    if data.is_first_visit() {
        let complaints: Vec<String> = data
            .chief_complaints
            .iter()
            .filter_map(|complaint| {
                if complaint == OTHER_COMPLAINT {
                    present(&data.chief_complaint_other).map(str::to_string)
                } else {
                    lookup(tables::CHIEF_COMPLAINTS, complaint).map(str::to_lowercase)
                }
            })
            .collect();
        if !complaints.is_empty() {
            sentences.push(format!(
                "Patient presents with {}.",
                join_naturally(&complaints)
            ));
        }
    } else {
        sentences.push(CONTINUING_TREATMENT.to_string());
    }

    let duration = present(&data.pain_duration)
        .filter(|d| *d != "na")
        .map(|d| resolve_label(tables::PAIN_DURATIONS, d));
    let characteristics = lowercase(resolve_labels(
        tables::PAIN_CHARACTERISTICS,
        &data.pain_characteristics,
    ));

    if !characteristics.is_empty() {
        let mut sentence = format!("Reports {} pain", join_naturally(&characteristics));
        if let Some(duration) = &duration {
            sentence.push_str(&format!(" for {duration}"));
        }
        sentence.push('.');
        sentences.push(sentence);
    } else if let Some(duration) = duration {
        sentences.push(format!("Duration: {duration}."));
    }

    (!sentences.is_empty()).then(|| sentences.join(" "))
}

// Objective

fn objective(data: &NoteData) -> Vec<String> {
    let mut findings = Vec::new();

    if data.is_first_visit() {
        let triads = [
            triad(&[
                ("Cold", tables::THERMAL_TESTS, &data.cold_test),
                ("EPT", tables::EPT_RESULTS, &data.ept_test),
                ("Heat", tables::THERMAL_TESTS, &data.heat_test),
            ]),
            triad(&[
                ("Percussion", tables::PERCUSSION_PALPATION, &data.percussion),
                ("Palpation", tables::PERCUSSION_PALPATION, &data.palpation),
            ]),
            triad(&[
                ("Probing", tables::PROBING, &data.probing),
                ("Mobility", tables::MOBILITY, &data.mobility),
            ]),
        ];
        findings.extend(triads.into_iter().flatten());
    }

    let swelling = resolve_labels(tables::SWELLING, &without_none(&data.swelling));
    findings.extend(labelled_list("Swelling", &swelling, ", "));

    if data.sinus_tract {
        findings.push("Sinus Tract: Present".to_string());
    }

    let radiographic = resolve_labels(tables::RADIOGRAPHIC_FINDINGS, &data.radiographic_findings);
    findings.extend(labelled_list("Radiographic Findings", &radiographic, ", "));

    let mut paragraphs = Vec::new();
    if !findings.is_empty() {
        paragraphs.push(findings.join("\n"));
    }
    if let Some(notes) = free_text(&data.objective_notes) {
        paragraphs.push(headed("Additional Comments:", notes));
    }
    paragraphs
}

/// Pipe-join the members of a test group that have a value.
fn triad(items: &[(&str, &[ClinicalOption], &String)]) -> Option<String> {
    let parts: Vec<String> = items
        .iter()
        .filter_map(|(label, options, value)| labelled(label, options, value))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" | "))
}

// Assessment

fn assessment(data: &NoteData) -> Vec<String> {
    let lines: Vec<String> = data
        .tooth_diagnoses
        .iter()
        .filter(|d| d.has_tooth_number())
        .map(diagnosis_line)
        .collect();

    let mut paragraphs = vec![if lines.is_empty() {
        ASSESSMENT_PENDING.to_string()
    } else {
        lines.join("\n")
    }];
    if let Some(notes) = free_text(&data.assessment_notes) {
        paragraphs.push(headed("Additional Comments:", notes));
    }
    paragraphs
}

fn diagnosis_line(diagnosis: &ToothDiagnosis) -> String {
    let mut parts = vec![format!("Tooth #{}", diagnosis.tooth_number.trim())];
    parts.extend(
        [
            labelled("Pulpal", tables::PULPAL_DIAGNOSES, &diagnosis.pulpal_diagnosis),
            labelled(
                "Periapical",
                tables::PERIAPICAL_DIAGNOSES,
                &diagnosis.periapical_diagnosis,
            ),
            labelled("Prognosis", tables::PROGNOSES, &diagnosis.prognosis),
            labelled("Treatment", tables::TREATMENTS, &diagnosis.recommended_treatment),
        ]
        .into_iter()
        .flatten(),
    );
    parts.join(" | ")
}

// Plan

fn plan(data: &NoteData) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let plans = &data.tooth_treatment_plans;
    let prefix = |plan: &ToothTreatmentPlan| tooth_prefix(plan, plans.len());

    let offered = resolve_labels(tables::TREATMENTS, &data.treatment_options_offered);
    if !offered.is_empty() {
        paragraphs.push(format!(
            "Treatment Options Offered: {}.",
            join_naturally(&offered)
        ));
    }

    if data.consent_given {
        paragraphs.push(CONSENT_TEXT.to_string());
    }

    paragraphs.extend(anesthesia_line(data));
    paragraphs.extend(labelled("Isolation", tables::ISOLATION, &data.isolation));

    for plan in plans {
        let performed = resolve_labels(tables::TREATMENTS, &plan.treatment_performed);
        if let Some(line) = labelled_list("Treatment Performed", &performed, ", ") {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
        if let Some(line) = labelled("Outcome", tables::TREATMENT_OUTCOMES, &plan.treatment_outcome) {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
    }

    let detailed: Vec<&ToothTreatmentPlan> =
        plans.iter().filter(|p| !p.suppresses_canal_detail()).collect();

    for plan in &detailed {
        if let Some(line) = canal_configuration_line(plan) {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
    }
    for plan in &detailed {
        if let Some(line) = working_length_line(plan) {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
        let flare = resolve_labels(tables::CORONAL_FLARE, &plan.coronal_flare);
        if let Some(line) = labelled_list("Coronal Flare", &flare, ", ") {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
    }
    for plan in &detailed {
        let lines: Vec<String> = plan
            .current_canal_mafs()
            .into_iter()
            .filter(|maf| maf.has_detail())
            .map(canal_detail_line)
            .collect();
        if !lines.is_empty() {
            let heading = prefix(plan);
            if heading.is_empty() {
                paragraphs.push(lines.join("\n"));
            } else {
                paragraphs.push(format!("{}\n{}", heading.trim_end(), lines.join("\n")));
            }
        }
    }

    paragraphs.extend(procedural_step_lines(data));

    let irrigation = resolve_labels(tables::IRRIGATION, &data.irrigation);
    paragraphs.extend(labelled_list("Irrigation", &irrigation, ", "));

    if data.medicament.trim() != NONE {
        paragraphs.extend(labelled(
            "Intracanal Medicament",
            tables::MEDICAMENTS,
            &data.medicament,
        ));
    }

    for plan in plans {
        if let Some(line) = labelled("Restoration", tables::RESTORATIONS, &plan.restoration) {
            paragraphs.push(format!("{}{line}", prefix(plan)));
        }
    }

    paragraphs.extend(complications_line(&data.complications));

    let post_op = resolve_labels(tables::POST_OP_INSTRUCTIONS, &data.post_op_instructions);
    paragraphs.extend(labelled_list("Post-Op Instructions", &post_op, "; "));

    if let Some(notes) = free_text(&data.additional_notes) {
        paragraphs.push(headed("Additional Notes:", notes));
    }

    paragraphs.extend(labelled("Next Visit", tables::NEXT_VISIT, &data.next_visit));
    paragraphs.extend(labelled("Follow-Up", tables::FOLLOW_UP, &data.follow_up));
    if data.referral.trim() != NONE {
        paragraphs.extend(labelled("Referral", tables::REFERRALS, &data.referral));
    }

    paragraphs
}

/// With several teeth treated, plan lines name their tooth.
fn tooth_prefix(plan: &ToothTreatmentPlan, plan_count: usize) -> String {
    match present(&plan.tooth_number) {
        Some(tooth) if plan_count > 1 => format!("Tooth #{tooth} - "),
        _ => String::new(),
    }
}

fn anesthesia_line(data: &NoteData) -> Option<String> {
    let types: Vec<&String> = if data.anesthesia_types.is_empty() {
        data.anesthesia_amounts.keys().collect()
    } else {
        data.anesthesia_types.iter().collect()
    };

    let agents: Vec<String> = types
        .iter()
        .map(|agent| {
            let label = resolve_label(tables::ANESTHETICS, agent);
            match data.anesthesia_amounts.get(*agent).and_then(|a| present(a)) {
                Some("1") => format!("1 carpule of {label}"),
                Some(amount) => format!("{amount} carpules of {label}"),
                None => label,
            }
        })
        .collect();

    let mapped = data.anesthesia_types.len() > 1;
    let locations: Vec<String> = data
        .anesthesia_locations
        .iter()
        .map(|location| {
            let mut text = resolve_label(tables::ANESTHESIA_LOCATIONS, location);
            if let Some(side) = data.anesthesia_location_sides.get(location) {
                text.push_str(&format!(
                    " ({})",
                    resolve_label(tables::ANESTHESIA_SIDES, side.as_str())
                ));
            }
            if mapped
                && let Some(anesthetics) = data.anesthesia_location_mapping.get(location)
            {
                let labels = resolve_labels(tables::ANESTHETICS, anesthetics);
                if !labels.is_empty() {
                    text.push_str(&format!(": {}", labels.join(", ")));
                }
            }
            text
        })
        .collect();

    let body = match (agents.is_empty(), locations.is_empty()) {
        (true, true) => return None,
        (false, true) => agents.join(", "),
        (true, false) => locations.join("; "),
        (false, false) => format!("{} via {}", agents.join(", "), locations.join("; ")),
    };
    Some(format!("Anesthesia: {body}"))
}

fn canal_configuration_line(plan: &ToothTreatmentPlan) -> Option<String> {
    let mut labels = resolve_labels(tables::CANAL_CONFIGURATIONS, &plan.canal_configuration);
    let custom: Vec<&str> = plan
        .custom_canal_names
        .iter()
        .filter_map(|n| present(n))
        .collect();
    if !custom.is_empty() {
        for label in labels.iter_mut() {
            if label == OTHER_CONFIGURATION_LABEL {
                *label = custom.join(", ");
            }
        }
    }
    labelled_list("Canal Configuration", &labels, ", ")
}

fn working_length_line(plan: &ToothTreatmentPlan) -> Option<String> {
    let methods = resolve_labels(tables::WORKING_LENGTH_METHODS, &plan.working_length_method);
    let lengths: Vec<String> = plan
        .current_canal_mafs()
        .into_iter()
        .filter_map(|maf| {
            let length = present(&maf.working_length)?;
            let mut text = if length.ends_with("mm") {
                format!("{} {length}", maf.canal)
            } else {
                format!("{} {length} mm", maf.canal)
            };
            if let Some(reference) = present(&maf.reference_point) {
                text.push_str(&format!(
                    " ({})",
                    resolve_label(tables::REFERENCE_POINTS, reference)
                ));
            }
            Some(text)
        })
        .collect();

    let body = match (methods.is_empty(), lengths.is_empty()) {
        (true, true) => return None,
        (false, true) => methods.join(", "),
        (true, false) => lengths.join(", "),
        (false, false) => format!("{} | {}", methods.join(", "), lengths.join(", ")),
    };
    Some(format!("Working Length: {body}"))
}

/// `{canal} - {Patent|Not Patent}; Prep: {system size taper}; Obt: {technique
/// material} with Sealer: {sealer}`, dropping whichever clauses are empty.
fn canal_detail_line(maf: &CanalMaf) -> String {
    let mut line = format!(
        "{} - {}",
        maf.canal,
        if maf.patent { "Patent" } else { "Not Patent" }
    );

    let prep = preparation(maf);
    if !prep.is_empty() {
        line.push_str(&format!("; Prep: {prep}"));
    }

    let obturation = join_present(&[
        present(&maf.obturation_technique)
            .map(|v| resolve_label(tables::OBTURATION_TECHNIQUES, v)),
        present(&maf.obturation_material)
            .map(|v| resolve_label(tables::OBTURATION_MATERIALS, v)),
    ]);
    let sealer = present(&maf.obturation_sealer).map(|v| resolve_label(tables::SEALERS, v));
    match (obturation.is_empty(), sealer) {
        (true, None) => {}
        (false, None) => line.push_str(&format!("; Obt: {obturation}")),
        (true, Some(sealer)) => line.push_str(&format!("; Obt: Sealer: {sealer}")),
        (false, Some(sealer)) => {
            line.push_str(&format!("; Obt: {obturation} with Sealer: {sealer}"))
        }
    }
    line
}

fn preparation(maf: &CanalMaf) -> String {
    let taper = |value: String| present(&value).map(|t| resolve_label(tables::TAPERS, t));

    if maf.file_system.is_empty() {
        let size = maf.size_for("");
        return join_present(&[present(&size).map(str::to_string), taper(maf.taper.clone())]);
    }

    maf.file_system
        .iter()
        .map(|system| {
            let size = maf.size_for(system);
            join_present(&[
                Some(resolve_label(tables::FILE_SYSTEMS, system)),
                present(&size).map(str::to_string),
                taper(maf.taper_for(system)),
            ])
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_present(parts: &[Option<String>]) -> String {
    parts
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn procedural_step_lines(data: &NoteData) -> Vec<String> {
    data.procedural_steps
        .records()
        .into_iter()
        .filter(|(procedure, _)| data.has_procedure(procedure))
        .filter_map(|(procedure, entries)| {
            let parts: Vec<String> = entries
                .iter()
                .filter_map(|(label, value)| labelled(label, tables::PROCEDURE_OPTIONS, value))
                .collect();
            (!parts.is_empty()).then(|| {
                format!(
                    "{}: {}",
                    resolve_label(tables::TREATMENTS, procedure),
                    parts.join("; ")
                )
            })
        })
        .collect()
}

fn complications_line(complications: &[String]) -> Option<String> {
    if complications.len() == 1 && complications[0] == NONE {
        return Some("Complications: None".to_string());
    }
    let labels = resolve_labels(tables::COMPLICATIONS, &without_none(complications));
    labelled_list("Complications", &labels, ", ")
}
