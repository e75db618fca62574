use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::anatomy::derive_canal_names;
use crate::options::tables::PULP_EXTIRPATION;

/// Treatment carried out on one tooth during the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ToothTreatmentPlan {
    pub id: Uuid,
    pub tooth_number: String,
    pub treatment_performed: Vec<String>,
    /// Controls which sub-sections apply; `pulp_extirpation` has no canal detail.
    pub treatment_outcome: String,
    pub canal_configuration: Vec<String>,
    /// Only read when `canal_configuration` contains `other`.
    pub custom_canal_names: Vec<String>,
    pub working_length_method: Vec<String>,
    pub coronal_flare: Vec<String>,
    pub restoration: String,
    /// One record per canal. Records for canals the configuration no longer
    /// implies are kept but never rendered.
    pub canal_mafs: Vec<CanalMaf>,
}

impl Default for ToothTreatmentPlan {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            tooth_number: String::new(),
            treatment_performed: Vec::new(),
            treatment_outcome: String::new(),
            canal_configuration: Vec::new(),
            custom_canal_names: Vec::new(),
            working_length_method: Vec::new(),
            coronal_flare: Vec::new(),
            restoration: String::new(),
            canal_mafs: Vec::new(),
        }
    }
}

impl ToothTreatmentPlan {
    pub fn for_tooth(tooth_number: &str) -> Self {
        Self {
            tooth_number: tooth_number.to_string(),
            ..Self::default()
        }
    }

    /// Canal names the current configuration implies, in configuration order.
    pub fn valid_canal_names(&self) -> Vec<String> {
        derive_canal_names(&self.canal_configuration, &self.custom_canal_names)
    }

    /// The MAF record for each valid canal, in canal order. Stale records and
    /// canals with no record are skipped.
    pub fn current_canal_mafs(&self) -> Vec<&CanalMaf> {
        self.valid_canal_names()
            .iter()
            .filter_map(|name| self.canal_mafs.iter().find(|maf| &maf.canal == name))
            .collect()
    }

    pub fn suppresses_canal_detail(&self) -> bool {
        self.treatment_outcome == PULP_EXTIRPATION
    }

    pub fn set_canal_configuration(&mut self, configuration: Vec<String>) {
        self.canal_configuration = configuration;
        self.sync_canal_mafs();
    }

    pub fn set_custom_canal_names(&mut self, names: Vec<String>) {
        self.custom_canal_names = names;
        self.sync_canal_mafs();
    }

    /// Add an empty record for every valid canal that has none. Existing
    /// records, stale ones included, are left in place so that reverting the
    /// configuration brings their data back.
    pub fn sync_canal_mafs(&mut self) {
        for name in self.valid_canal_names() {
            if !self.canal_mafs.iter().any(|maf| maf.canal == name) {
                self.canal_mafs.push(CanalMaf::new(&name));
            }
        }
    }
}

/// Instrumentation and obturation record for one canal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CanalMaf {
    pub canal: String,
    pub patent: bool,
    pub working_length: String,
    pub reference_point: String,
    pub file_system: Vec<String>,
    pub size: String,
    /// Multi-select sizes, used for hand files.
    pub sizes: Vec<String>,
    pub system_sizes: BTreeMap<String, String>,
    pub taper: String,
    pub system_tapers: BTreeMap<String, String>,
    pub obturation_technique: String,
    pub obturation_material: String,
    pub obturation_sealer: String,
}

impl CanalMaf {
    pub fn new(canal: &str) -> Self {
        Self {
            canal: canal.to_string(),
            ..Self::default()
        }
    }

    /// Whether anything beyond the canal name has been recorded.
    pub fn has_detail(&self) -> bool {
        self.patent
            || !self.working_length.trim().is_empty()
            || !self.reference_point.is_empty()
            || !self.file_system.is_empty()
            || !self.size.is_empty()
            || !self.sizes.is_empty()
            || self.system_sizes.values().any(|v| !v.is_empty())
            || !self.taper.is_empty()
            || self.system_tapers.values().any(|v| !v.is_empty())
            || !self.obturation_technique.is_empty()
            || !self.obturation_material.is_empty()
            || !self.obturation_sealer.is_empty()
    }

    /// Size recorded for `system`: the per-system entry, else the multi-select
    /// sizes, else the single size.
    pub fn size_for(&self, system: &str) -> String {
        if let Some(size) = self.system_sizes.get(system).filter(|s| !s.is_empty()) {
            return size.clone();
        }
        if !self.sizes.is_empty() {
            return self.sizes.join("/");
        }
        self.size.clone()
    }

    pub fn taper_for(&self, system: &str) -> String {
        self.system_tapers
            .get(system)
            .filter(|t| !t.is_empty())
            .cloned()
            .unwrap_or_else(|| self.taper.clone())
    }
}
