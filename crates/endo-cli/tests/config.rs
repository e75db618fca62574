use std::path::PathBuf;

use endo_cli::config::{
    CURRENT_VERSION, EndoConfig, load_config, load_library, migrate, save_config, save_library,
};
use endo_core::library::{TemplateDraft, TemplateLibrary};
use endo_core::models::note::PartialNoteData;
use endo_core::models::template::TemplateScope;

#[test]
fn missing_config_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(dir.path()).unwrap();

    assert_eq!(cfg.config_version, CURRENT_VERSION);
    assert_eq!(cfg.referral_template.font_family, "Calibri");
    assert!(cfg.output_dir.is_none());
}

#[test]
fn v0_config_moves_document_settings() {
    let v0 = serde_json::json!({
        "output_dir": "/tmp/letters",
        "font_family": "Arial",
        "body_font_size_pt": 12.0,
    });

    let migrated = migrate(v0, 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert!(migrated.get("font_family").is_none());

    let cfg: EndoConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(cfg.referral_template.font_family, "Arial");
    assert_eq!(cfg.referral_template.body_font_size_pt, 12.0);
    assert_eq!(cfg.output_dir, Some(PathBuf::from("/tmp/letters")));
}

#[test]
fn v0_file_on_disk_is_migrated_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"font_family":"Georgia"}"#).unwrap();

    let cfg = load_config(dir.path()).unwrap();
    assert_eq!(cfg.config_version, 1);
    assert_eq!(cfg.referral_template.font_family, "Georgia");
}

#[test]
fn newer_config_version_is_rejected() {
    let json = serde_json::json!({ "config_version": CURRENT_VERSION + 1 });
    let err = migrate(json, CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn save_then_load_round_trips_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = EndoConfig {
        config_version: 0,
        output_dir: Some(PathBuf::from("/srv/referrals")),
        ..EndoConfig::default()
    };
    cfg.referral_template.signature.name = "Dr. Lee".to_string();
    cfg.referral_template.include_post_op = true;

    save_config(dir.path(), &cfg).unwrap();
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config(dir.path()).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.output_dir, cfg.output_dir);
    assert_eq!(loaded.referral_template, cfg.referral_template);
}

#[test]
fn save_creates_missing_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    save_config(&nested, &EndoConfig::default()).unwrap();
    assert!(nested.join("config.json").exists());
}

#[test]
fn library_path_defaults_next_to_config() {
    let cfg = EndoConfig::default();
    let dir = PathBuf::from("/home/me/.config/endonote");
    assert_eq!(cfg.library_path(&dir), dir.join("templates.json"));

    let custom = EndoConfig {
        template_library: Some(PathBuf::from("/shared/templates.json")),
        ..EndoConfig::default()
    };
    assert_eq!(custom.library_path(&dir), PathBuf::from("/shared/templates.json"));
}

#[test]
fn template_library_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");
    assert!(load_library(&path).unwrap().templates().is_empty());

    let mut library = TemplateLibrary::new();
    library
        .save(
            TemplateDraft {
                name: "Cold sensitivity".to_string(),
                data: PartialNoteData {
                    cold_test: Some("lingering".to_string()),
                    ..PartialNoteData::default()
                },
                scope: vec![TemplateScope::Objective],
                visit_type: None,
                tooth_type: None,
                procedure_types: Vec::new(),
            },
            false,
        )
        .unwrap();
    save_library(&path, &library).unwrap();
    assert!(!dir.path().join("templates.json.tmp").exists());

    let loaded = load_library(&path).unwrap();
    assert_eq!(loaded, library);
    let template = loaded.find_by_name("cold sensitivity").unwrap();
    assert_eq!(template.data.cold_test.as_deref(), Some("lingering"));
}

#[cfg(unix)]
#[test]
fn saved_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    save_config(dir.path(), &EndoConfig::default()).unwrap();

    let mode = std::fs::metadata(dir.path().join("config.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
