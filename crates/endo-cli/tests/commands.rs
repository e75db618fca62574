use clap::Parser;

use endo_cli::cli::{Cli, Command, ImageSlotArg, ScopeArg, TemplateCommand};
use endo_cli::commands::{export_file_name, read_note};
use endo_core::anatomy::ToothType;
use endo_core::models::note::NoteData;
use endo_core::models::template::TemplateScope;
use endo_export::images::ImageSlot;

#[test]
fn partial_note_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.json");
    std::fs::write(&path, r#"{"patient_name":"Ann Smith","tooth_number":"30"}"#).unwrap();

    let note = read_note(&path).unwrap();
    assert_eq!(note.patient_name, "Ann Smith");
    assert_eq!(note.tooth_type, Some(ToothType::Molar));
    assert_eq!(note.tooth_diagnoses.len(), 1);
    assert_eq!(note.tooth_diagnoses[0].tooth_number, "30");
    assert!(note.is_first_visit());
}

#[test]
fn invalid_note_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.json");
    std::fs::write(&path, "not json").unwrap();

    let err = read_note(&path).unwrap_err();
    assert!(err.to_string().contains("invalid note JSON"));
}

#[test]
fn export_file_name_uses_patient_and_date() {
    let mut note = NoteData::default();
    assert_eq!(export_file_name(&note), "referral.docx");

    note.patient_name = "Ann Smith".to_string();
    note.date = "2026-03-14".to_string();
    assert_eq!(export_file_name(&note), "referral_Ann_Smith_2026-03-14.docx");
}

#[test]
fn parses_template_save_with_scopes() {
    let cli = Cli::try_parse_from([
        "endonote",
        "template",
        "save",
        "note.json",
        "--name",
        "Molar RCT",
        "--scope",
        "plan",
        "--scope",
        "referral",
        "--tagged",
    ])
    .unwrap();

    match cli.command {
        Command::Template(TemplateCommand::Save {
            name,
            scope,
            tagged,
            overwrite,
            ..
        }) => {
            assert_eq!(name, "Molar RCT");
            assert_eq!(scope, vec![ScopeArg::Plan, ScopeArg::Referral]);
            assert!(tagged);
            assert!(!overwrite);
            let mapped: Vec<TemplateScope> = scope.into_iter().map(TemplateScope::from).collect();
            assert_eq!(mapped, vec![TemplateScope::Plan, TemplateScope::Referral]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_flags_follow_subcommand() {
    let cli = Cli::try_parse_from([
        "endonote",
        "soap",
        "note.json",
        "--config-dir",
        "/tmp/endo",
        "--json-logs",
    ])
    .unwrap();
    assert!(cli.json_logs);
    assert_eq!(cli.config_dir.as_deref(), Some(std::path::Path::new("/tmp/endo")));
}

#[test]
fn radiograph_index_counts_from_one() {
    assert_eq!(ImageSlotArg::Radiograph.slot(1), ImageSlot::Radiograph(0));
    assert_eq!(ImageSlotArg::Radiograph.slot(3), ImageSlot::Radiograph(2));
    assert_eq!(ImageSlotArg::Radiograph.slot(0), ImageSlot::Radiograph(0));
    assert_eq!(ImageSlotArg::Logo.slot(5), ImageSlot::Logo);
}

#[test]
fn image_takes_a_file_or_clear() {
    let cli = Cli::try_parse_from(["endonote", "image", "radiograph", "--clear", "--index", "2"])
        .unwrap();
    match cli.command {
        Command::Image {
            slot,
            path,
            clear,
            index,
        } => {
            assert!(clear);
            assert!(path.is_none());
            assert_eq!(slot.slot(index), ImageSlot::Radiograph(1));
        }
        other => panic!("unexpected command: {other:?}"),
    }

    assert!(Cli::try_parse_from(["endonote", "image", "logo"]).is_err());
    assert!(Cli::try_parse_from(["endonote", "image", "logo", "logo.png", "--clear"]).is_err());
}
