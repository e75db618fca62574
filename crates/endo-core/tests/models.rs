use endo_core::anatomy::ToothType;
use endo_core::models::diagnosis::{ToothDiagnosis, normalize_tooth_diagnoses};
use endo_core::models::note::{AnesthesiaSide, NoteData, NoteField, PartialNoteData};
use endo_core::models::plan::{CanalMaf, ToothTreatmentPlan};
use uuid::Uuid;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn initial_note_has_one_blank_diagnosis() {
    let note = NoteData::default();
    assert_eq!(note.tooth_diagnoses.len(), 1);
    assert!(!note.tooth_diagnoses[0].has_tooth_number());
}

#[test]
fn setting_tooth_number_rederives_tooth_type() {
    let mut note = NoteData::default();
    note.set_tooth_number("19");
    assert_eq!(note.tooth_type, Some(ToothType::Molar));
    note.set_tooth_number("9");
    assert_eq!(note.tooth_type, Some(ToothType::Anterior));
    note.set_tooth_number("");
    assert_eq!(note.tooth_type, None);
}

#[test]
fn first_block_selection_defaults_to_right_side() {
    let mut note = NoteData::default();
    note.set_anesthesia_locations(strings(&["ian_block"]));
    assert_eq!(
        note.anesthesia_location_sides.get("ian_block"),
        Some(&AnesthesiaSide::Rhs)
    );
}

#[test]
fn existing_side_survives_reselection_and_removed_locations_are_dropped() {
    let mut note = NoteData::default();
    note.set_anesthesia_locations(strings(&["ian_block", "long_buccal"]));
    note.anesthesia_location_sides
        .insert("ian_block".to_string(), AnesthesiaSide::Lhs);
    note.set_anesthesia_locations(strings(&["ian_block", "buccal_infiltration"]));

    assert_eq!(
        note.anesthesia_location_sides.get("ian_block"),
        Some(&AnesthesiaSide::Lhs)
    );
    assert!(!note.anesthesia_location_sides.contains_key("long_buccal"));
    assert!(!note.anesthesia_location_sides.contains_key("buccal_infiltration"));
}

#[test]
fn single_anesthetic_clears_location_mapping() {
    let mut note = NoteData::default();
    note.set_anesthesia_types(strings(&["lidocaine_2_100k", "articaine_4_100k"]));
    note.anesthesia_location_mapping
        .insert("ian_block".to_string(), strings(&["lidocaine_2_100k"]));
    note.set_anesthesia_types(strings(&["lidocaine_2_100k"]));
    assert!(note.anesthesia_location_mapping.is_empty());
}

#[test]
fn syncing_canals_adds_missing_and_keeps_stale_records() {
    let mut plan = ToothTreatmentPlan::for_tooth("19");
    plan.set_canal_configuration(strings(&["mb_ml_d"]));
    plan.canal_mafs[1].working_length = "21".to_string();

    plan.set_canal_configuration(strings(&["mb_db_p"]));
    let canals: Vec<&str> = plan.canal_mafs.iter().map(|m| m.canal.as_str()).collect();
    assert_eq!(canals, vec!["MB", "ML", "D", "DB", "P"]);

    let current: Vec<&str> = plan
        .current_canal_mafs()
        .iter()
        .map(|m| m.canal.as_str())
        .collect();
    assert_eq!(current, vec!["MB", "DB", "P"]);

    plan.set_canal_configuration(strings(&["mb_ml_d"]));
    assert_eq!(plan.current_canal_mafs()[1].working_length, "21");
}

#[test]
fn canal_size_falls_back_from_system_to_multi_select_to_single() {
    let mut maf = CanalMaf::new("MB");
    maf.size = "25".to_string();
    assert_eq!(maf.size_for("protaper_gold"), "25");
    maf.sizes = strings(&["15", "20"]);
    assert_eq!(maf.size_for("hand_files"), "15/20");
    maf.system_sizes
        .insert("protaper_gold".to_string(), "F2".to_string());
    assert_eq!(maf.size_for("protaper_gold"), "F2");
}

#[test]
fn normalizer_seeds_empty_list_from_fallback_tooth() {
    let diagnoses = normalize_tooth_diagnoses(None, "30");
    assert_eq!(diagnoses.len(), 1);
    assert_eq!(diagnoses[0].tooth_number, "30");
    assert_eq!(diagnoses[0].tooth_type, Some(ToothType::Molar));
}

#[test]
fn normalizer_keeps_ids_and_fills_missing_ones() {
    let kept = ToothDiagnosis::for_tooth("8");
    let mut missing = ToothDiagnosis::new();
    missing.id = Uuid::nil();
    missing.tooth_number = "4".to_string();

    let diagnoses = normalize_tooth_diagnoses(Some(&[kept.clone(), missing]), "");
    assert_eq!(diagnoses[0].id, kept.id);
    assert!(!diagnoses[1].id.is_nil());
    assert_eq!(diagnoses[1].tooth_type, Some(ToothType::Premolar));
}

#[test]
fn assigning_unset_field_restores_initial_value() {
    let mut note = NoteData::default();
    note.pulse = "88".to_string();
    note.sinus_tract = true;

    note.assign_field(NoteField::Pulse, &PartialNoteData::default());
    let mut source = PartialNoteData::default();
    source.sinus_tract = Some(false);
    note.assign_field(NoteField::SinusTract, &source);

    assert_eq!(note.pulse, "");
    assert!(!note.sinus_tract);
}

#[test]
fn note_round_trips_through_json_with_missing_fields() {
    let note: NoteData = serde_json::from_str(r#"{"tooth_number":"14","swelling":["none"]}"#)
        .expect("partial note should deserialize");
    assert_eq!(note.tooth_number, "14");
    assert_eq!(note.swelling, vec!["none"]);
    assert_eq!(note.tooth_diagnoses.len(), 1);
}
