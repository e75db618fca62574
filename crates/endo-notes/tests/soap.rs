use std::collections::BTreeMap;

use endo_core::models::note::{NoteData, VisitType};
use endo_core::models::plan::{CanalMaf, ToothTreatmentPlan};
use endo_notes::consent::CONSENT_TEXT;
use endo_notes::soap::{CONTINUING_TREATMENT, generate_soap_note};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn molar_plan(tooth: &str) -> ToothTreatmentPlan {
    let mut plan = ToothTreatmentPlan::for_tooth(tooth);
    plan.treatment_performed = strings(&["initial_rct"]);
    plan.set_canal_configuration(strings(&["mb_db_p"]));
    plan
}

#[test]
fn empty_note_renders_fixed_fallbacks() {
    let note = generate_soap_note(&NoteData::default());
    assert_eq!(
        note,
        "SUBJECTIVE:\n\n\
         History:\n\nNo history reported.\n\n\
         Chief Complaint:\n\nNo chief complaint reported.\n\n\
         OBJECTIVE:\n\n\
         ASSESSMENT:\n\nAssessment pending.\n\n\
         PLAN:"
    );
}

#[test]
fn rendering_is_deterministic() {
    let mut data = NoteData::default();
    data.set_tooth_number("19");
    data.pulse = "72".to_string();
    data.tooth_treatment_plans = vec![molar_plan("19")];
    assert_eq!(generate_soap_note(&data), generate_soap_note(&data));
}

#[test]
fn diagnosis_line_for_a_molar() {
    let mut data = NoteData::default();
    let diagnosis = &mut data.tooth_diagnoses[0];
    diagnosis.set_tooth_number("19");
    diagnosis.pulpal_diagnosis = "pulp_necrosis".to_string();
    diagnosis.periapical_diagnosis = "symptomatic_ap".to_string();
    diagnosis.prognosis = "favorable".to_string();
    diagnosis.recommended_treatment = "initial_rct".to_string();

    let note = generate_soap_note(&data);
    let start = note.find("ASSESSMENT:\n\n").unwrap() + "ASSESSMENT:\n\n".len();
    let end = note.find("\n\nPLAN:").unwrap();
    assert_eq!(
        &note[start..end],
        "Tooth #19 | Pulpal: Pulp Necrosis | Periapical: Symptomatic Apical Periodontitis \
         | Prognosis: Favorable | Treatment: Non-Surgical Root Canal Therapy"
    );
}

#[test]
fn vitals_and_medical_history() {
    let mut data = NoteData::default();
    data.blood_pressure = "120/80".to_string();
    data.pulse = "72".to_string();
    data.respiratory_rate = "16".to_string();
    data.medical_alerts = strings(&["hypertension", "none"]);

    let note = generate_soap_note(&data);
    assert!(note.contains(
        "History:\n\nBP: 120/80 mmHg, Pulse: 72 bpm, RR: 16 breaths/min unlaboured. \
         Medical history significant for hypertension."
    ));
}

#[test]
fn chief_complaint_uses_custom_text_for_other() {
    let mut data = NoteData::default();
    data.chief_complaints = strings(&["pain", "other"]);
    data.chief_complaint_other = "broken filling".to_string();
    data.pain_characteristics = strings(&["sharp", "throbbing"]);
    data.pain_duration = "2_weeks".to_string();

    let note = generate_soap_note(&data);
    assert!(note.contains(
        "Chief Complaint:\n\nPatient presents with pain and broken filling. \
         Reports sharp and throbbing pain for 2 weeks."
    ));
}

#[test]
fn unknown_duration_alone_is_not_reported() {
    let mut data = NoteData::default();
    data.pain_duration = "na".to_string();
    assert!(generate_soap_note(&data).contains("No chief complaint reported."));
}

#[test]
fn continuing_visit_skips_first_visit_findings() {
    let mut data = NoteData::default();
    data.visit_type = VisitType::ContinuingTreatment;
    data.chief_complaints = strings(&["pain"]);
    data.medical_alerts = strings(&["hypertension"]);
    data.cold_test = "lingering".to_string();
    data.percussion = "tender".to_string();
    data.sinus_tract = true;

    let note = generate_soap_note(&data);
    assert!(note.contains(CONTINUING_TREATMENT));
    assert!(!note.contains("Patient presents with"));
    assert!(!note.contains("Medical history"));
    assert!(!note.contains("Cold:"));
    assert!(!note.contains("Percussion:"));
    assert!(note.contains("Sinus Tract: Present"));
}

#[test]
fn first_visit_test_groups_are_pipe_joined() {
    let mut data = NoteData::default();
    data.cold_test = "lingering".to_string();
    data.percussion = "tender".to_string();
    data.palpation = "tender".to_string();

    let note = generate_soap_note(&data);
    assert!(note.contains("Cold: Lingering\nPercussion: Tender | Palpation: Tender"));
}

#[test]
fn blank_free_text_is_omitted() {
    let mut data = NoteData::default();
    data.objective_notes = "   ".to_string();
    data.additional_notes = "\n".to_string();
    let note = generate_soap_note(&data);
    assert!(!note.contains("Additional Comments:"));
    assert!(!note.contains("Additional Notes:"));
}

#[test]
fn anesthesia_amounts_and_sides() {
    let mut data = NoteData::default();
    data.set_anesthesia_types(strings(&["lidocaine_2_100k"]));
    data.anesthesia_amounts = BTreeMap::from([("lidocaine_2_100k".to_string(), "2".to_string())]);
    data.set_anesthesia_locations(strings(&["ian_block"]));

    let note = generate_soap_note(&data);
    assert!(note.contains("Anesthesia: 2 carpules of Lidocaine 2% 1:100,000 epi via IANB (RHS)"));

    data.anesthesia_amounts
        .insert("lidocaine_2_100k".to_string(), "1".to_string());
    assert!(generate_soap_note(&data).contains("1 carpule of Lidocaine"));
}

#[test]
fn consent_is_reproduced_verbatim() {
    let mut data = NoteData::default();
    assert!(!generate_soap_note(&data).contains("Informed Consent"));
    data.consent_given = true;
    assert!(generate_soap_note(&data).contains(CONSENT_TEXT));
}

#[test]
fn canal_lines_follow_the_current_configuration() {
    let mut plan = molar_plan("3");
    plan.working_length_method = strings(&["apex_locator"]);
    let mb = plan
        .canal_mafs
        .iter_mut()
        .find(|maf| maf.canal == "MB")
        .unwrap();
    mb.patent = true;
    mb.working_length = "21".to_string();
    mb.file_system = strings(&["protaper_gold"]);
    mb.system_sizes = BTreeMap::from([("protaper_gold".to_string(), "F2".to_string())]);
    mb.taper = "06".to_string();
    mb.obturation_technique = "warm_vertical".to_string();
    mb.obturation_material = "gutta_percha".to_string();
    mb.obturation_sealer = "ah_plus".to_string();

    let mut stale = CanalMaf::new("ML");
    stale.patent = true;
    stale.working_length = "19".to_string();
    plan.canal_mafs.push(stale);

    let mut data = NoteData::default();
    data.tooth_treatment_plans = vec![plan];
    let note = generate_soap_note(&data);

    assert!(note.contains("Canal Configuration: MB, DB, P"));
    assert!(note.contains("MB 21 mm"));
    assert!(note.contains(
        "MB - Patent; Prep: ProTaper Gold F2 .06; \
         Obt: Warm Vertical Compaction Gutta-Percha with Sealer: AH Plus"
    ));
    assert!(!note.contains("ML 19"));
    assert!(!note.contains("ML - "));
    assert!(!note.contains("DB - "));
}

#[test]
fn custom_canal_names_replace_the_other_label() {
    let mut plan = ToothTreatmentPlan::for_tooth("30");
    plan.set_canal_configuration(strings(&["other"]));
    plan.set_custom_canal_names(strings(&["MB", "MB2"]));

    let mut data = NoteData::default();
    data.tooth_treatment_plans = vec![plan];
    let note = generate_soap_note(&data);
    assert!(note.contains("Canal Configuration: MB, MB2"));
    assert!(!note.contains("Other (custom)"));
}

#[test]
fn pulp_extirpation_suppresses_canal_detail() {
    let mut plan = molar_plan("3");
    plan.treatment_outcome = "pulp_extirpation".to_string();
    plan.canal_mafs[0].patent = true;

    let mut data = NoteData::default();
    data.tooth_treatment_plans = vec![plan];
    let note = generate_soap_note(&data);
    assert!(note.contains("Outcome: Pulp Extirpation"));
    assert!(!note.contains("Canal Configuration:"));
    assert!(!note.contains("MB - Patent"));
}

#[test]
fn several_plans_are_prefixed_with_their_tooth() {
    let mut first = molar_plan("3");
    first.restoration = "composite".to_string();
    let mut second = molar_plan("14");
    second.restoration = "composite".to_string();

    let mut data = NoteData::default();
    data.tooth_treatment_plans = vec![first.clone(), second];
    let note = generate_soap_note(&data);
    assert!(note.contains("Tooth #3 - Restoration: Composite"));
    assert!(note.contains("Tooth #14 - Restoration: Composite"));

    data.tooth_treatment_plans = vec![first];
    let note = generate_soap_note(&data);
    assert!(note.contains("\n\nRestoration: Composite"));
}

#[test]
fn procedure_steps_need_their_procedure() {
    let mut data = NoteData::default();
    data.procedural_steps.apical_microsurgery.flap_design = "sulcular".to_string();
    data.procedural_steps.apical_microsurgery.root_end_resection_mm = "3".to_string();
    assert!(!generate_soap_note(&data).contains("Apical Microsurgery:"));

    let mut plan = ToothTreatmentPlan::for_tooth("8");
    plan.treatment_performed = strings(&["apical_microsurgery"]);
    data.tooth_treatment_plans = vec![plan];
    assert!(
        generate_soap_note(&data)
            .contains("Apical Microsurgery: Flap: Sulcular Flap; Root-End Resection (mm): 3")
    );
}

#[test]
fn none_selections_render_as_expected() {
    let mut data = NoteData::default();
    data.complications = strings(&["none"]);
    data.medicament = "none".to_string();
    data.referral = "none".to_string();
    data.swelling = strings(&["none"]);

    let note = generate_soap_note(&data);
    assert!(note.contains("Complications: None"));
    assert!(!note.contains("Intracanal Medicament"));
    assert!(!note.contains("Referral:"));
    assert!(!note.contains("Swelling:"));
}
