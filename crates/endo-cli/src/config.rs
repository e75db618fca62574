use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use endo_core::library::TemplateLibrary;
use endo_core::models::referral_template::ReferralTemplate;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";
const LIBRARY_FILE: &str = "templates.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where exported documents go when no output file is given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Template library file; defaults to `templates.json` next to the config.
    #[serde(default)]
    pub template_library: Option<PathBuf>,
    /// Added in v1. Older configs get the default document settings.
    #[serde(default)]
    pub referral_template: ReferralTemplate,
}

impl EndoConfig {
    pub fn library_path(&self, config_dir: &Path) -> PathBuf {
        self.template_library
            .clone()
            .unwrap_or_else(|| config_dir.join(LIBRARY_FILE))
    }
}

pub fn default_config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("endonote"))
}

/// Load the config in `dir`, or the default config if none has been saved.
pub fn load_config(dir: &Path) -> eyre::Result<EndoConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(EndoConfig {
            config_version: CURRENT_VERSION,
            ..EndoConfig::default()
        });
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: EndoConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update endonote."
        ));
    }

    // v0 → v1: document settings moved under `referral_template`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let mut referral = serde_json::Map::new();
        for key in ["margins", "font_family", "body_font_size_pt", "header", "footer", "signature"] {
            if let Some(value) = obj.remove(key) {
                referral.insert(key.to_string(), value);
            }
        }
        obj.entry("referral_template")
            .or_insert(serde_json::Value::Object(referral));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (moved document settings)");
    }

    Ok(json)
}

/// Write `contents` to `path` through a temp file and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("{} has no parent directory", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = dir.join(tmp_name);
    std::fs::write(&tmp_path, contents)?;

    // Templates may carry patient details; owner-only on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn save_config(dir: &Path, config: &EndoConfig) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;
    write_atomic(&path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn load_library(path: &Path) -> eyre::Result<TemplateLibrary> {
    if !path.exists() {
        return Ok(TemplateLibrary::new());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read templates at {}: {e}", path.display()))?;
    Ok(TemplateLibrary::from_json(&contents)?)
}

pub fn save_library(path: &Path, library: &TemplateLibrary) -> eyre::Result<()> {
    write_atomic(path, library.to_json()?.as_bytes())?;
    tracing::info!(path = %path.display(), templates = library.templates().len(), "templates saved");
    Ok(())
}
