//! Structural maps: tooth number → tooth type, canal configuration → canal
//! names, and which anesthesia locations can be given on either side.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Configuration value whose canals come from the plan's custom names.
pub const OTHER_CONFIGURATION: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToothType {
    Anterior,
    Premolar,
    Molar,
}

impl ToothType {
    pub fn as_str(self) -> &'static str {
        match self {
            ToothType::Anterior => "anterior",
            ToothType::Premolar => "premolar",
            ToothType::Molar => "molar",
        }
    }
}

/// Classify a Universal-numbering tooth (1–32, or primary A–T).
///
/// Returns `None` for blank or unrecognised input, so callers can leave the
/// tooth type unset rather than guess.
pub fn classify_tooth(tooth_number: &str) -> Option<ToothType> {
    let trimmed = tooth_number.trim().trim_start_matches('#');
    if let Ok(n) = trimmed.parse::<u8>() {
        return match n {
            1..=3 | 14..=19 | 30..=32 => Some(ToothType::Molar),
            4 | 5 | 12 | 13 | 20 | 21 | 28 | 29 => Some(ToothType::Premolar),
            6..=11 | 22..=27 => Some(ToothType::Anterior),
            _ => None,
        };
    }

    let mut chars = trimmed.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    match letter {
        'A' | 'B' | 'I' | 'J' | 'K' | 'L' | 'S' | 'T' => Some(ToothType::Molar),
        'C'..='H' | 'M'..='R' => Some(ToothType::Anterior),
        _ => None,
    }
}

/// Canal names implied by a single configuration value.
pub fn canal_names(configuration: &str) -> &'static [&'static str] {
    match configuration {
        "single" => &["Canal"],
        "b_l" => &["B", "L"],
        "b_p" => &["B", "P"],
        "m_d" => &["M", "D"],
        "mb_db_p" => &["MB", "DB", "P"],
        "mb_mb2_db_p" => &["MB", "MB2", "DB", "P"],
        "mb_ml_d" => &["MB", "ML", "D"],
        "mb_ml_db_dl" => &["MB", "ML", "DB", "DL"],
        "mb_ml_mm_d" => &["MB", "ML", "MM", "D"],
        "mb_ml_db_dl_d" => &["MB", "ML", "DB", "DL", "D"],
        "c_shaped" => &["C-shaped"],
        _ => &[],
    }
}

/// The de-duplicated, ordered canal set for a plan's configuration.
///
/// Custom names are only used when `other` is one of the selected
/// configurations; blank custom names are ignored.
pub fn derive_canal_names<S: AsRef<str>>(configurations: &[S], custom_names: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    for configuration in configurations {
        let configuration = configuration.as_ref();
        if configuration == OTHER_CONFIGURATION {
            for custom in custom_names {
                push(custom.as_ref().trim());
            }
        } else {
            for name in canal_names(configuration) {
                push(name);
            }
        }
    }
    names
}

/// Block/infiltration sites that are recorded with a side (RHS/LHS/bilateral).
pub const BILATERAL_ELIGIBLE_LOCATIONS: &[&str] = &[
    "ian_block",
    "gow_gates",
    "akinosi",
    "long_buccal",
    "mental",
    "psa",
    "infraorbital",
    "greater_palatine",
];

pub fn is_bilateral_eligible(location: &str) -> bool {
    BILATERAL_ELIGIBLE_LOCATIONS.contains(&location)
}
