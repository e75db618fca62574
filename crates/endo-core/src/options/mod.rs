//! Option tables and the label resolver.
//!
//! Every enumerated field in a note stores the option's `value`; the label is
//! looked up at render time. Values that are not in the table are tolerated:
//! scalar lookups echo them verbatim, list lookups drop them.

pub mod tables;

use serde::Serialize;

/// A selectable value and the label displayed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClinicalOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const fn opt(value: &'static str, label: &'static str) -> ClinicalOption {
    ClinicalOption { value, label }
}

/// Prefixes the form adds to some values to keep them distinct from
/// same-named values in a shared multi-select (e.g. `tech_` on irrigation
/// activation techniques).
pub const KNOWN_PREFIXES: &[&str] = &["tech_"];

fn strip_known_prefix(value: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
        .unwrap_or(value)
}

/// Find the label for `value`, if the table knows it.
pub fn lookup(options: &[ClinicalOption], value: &str) -> Option<&'static str> {
    let find = |v: &str| options.iter().find(|o| o.value == v).map(|o| o.label);
    find(value).or_else(|| {
        let stripped = strip_known_prefix(value);
        if stripped.len() == value.len() {
            None
        } else {
            find(stripped)
        }
    })
}

/// Label for a single value; unknown values come back unchanged so free-text
/// entries still display.
pub fn resolve_label(options: &[ClinicalOption], value: &str) -> String {
    lookup(options, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Labels for a list of values, in input order. Unknown values are dropped.
pub fn resolve_labels<S: AsRef<str>>(options: &[ClinicalOption], values: &[S]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| lookup(options, v.as_ref()))
        .map(str::to_string)
        .collect()
}
