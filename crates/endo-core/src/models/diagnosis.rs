use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::anatomy::{ToothType, classify_tooth};

/// Diagnosis and recommendation for a single tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ToothDiagnosis {
    pub id: Uuid,
    pub tooth_number: String,
    pub tooth_type: Option<ToothType>,
    pub pulpal_diagnosis: String,
    pub periapical_diagnosis: String,
    pub prognosis: String,
    pub recommended_treatment: String,
}

impl Default for ToothDiagnosis {
    fn default() -> Self {
        Self::new()
    }
}

impl ToothDiagnosis {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            tooth_number: String::new(),
            tooth_type: None,
            pulpal_diagnosis: String::new(),
            periapical_diagnosis: String::new(),
            prognosis: String::new(),
            recommended_treatment: String::new(),
        }
    }

    pub fn for_tooth(tooth_number: &str) -> Self {
        let mut diagnosis = Self::new();
        diagnosis.set_tooth_number(tooth_number);
        diagnosis
    }

    /// Set the tooth number and re-derive the tooth type from it.
    pub fn set_tooth_number(&mut self, tooth_number: &str) {
        self.tooth_number = tooth_number.to_string();
        self.tooth_type = classify_tooth(tooth_number);
    }

    pub fn has_tooth_number(&self) -> bool {
        !self.tooth_number.trim().is_empty()
    }
}

/// Rebuild a diagnosis list so that it is safe to hand to the form.
///
/// Guarantees at least one entry (seeded with `fallback_tooth` when the
/// source is missing or empty), assigns ids to entries that lack one, and
/// re-derives each entry's tooth type from its tooth number.
pub fn normalize_tooth_diagnoses(
    entries: Option<&[ToothDiagnosis]>,
    fallback_tooth: &str,
) -> Vec<ToothDiagnosis> {
    let entries = entries.unwrap_or_default();
    if entries.is_empty() {
        return vec![ToothDiagnosis::for_tooth(fallback_tooth)];
    }

    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if entry.id.is_nil() {
                entry.id = Uuid::new_v4();
            }
            entry.tooth_type = classify_tooth(&entry.tooth_number).or(entry.tooth_type);
            entry
        })
        .collect()
}
