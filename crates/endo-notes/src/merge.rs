//! Template application.
//!
//! A whole-note template (scope `all`, or no scope at all) replaces the
//! record outright: fields it leaves unset go back to their initial values.
//! A scoped template overwrites exactly the fields its scopes own, and a
//! scoped field the template leaves unset is cleared rather than kept.

use tracing::debug;

use endo_core::anatomy::classify_tooth;
use endo_core::models::diagnosis::normalize_tooth_diagnoses;
use endo_core::models::note::{NoteData, NoteField, PartialNoteData};
use endo_core::models::template::{Template, TemplateScope};

/// Apply `template` to `current`, returning the new note. Neither input is
/// modified, and the result shares no data with the template.
pub fn apply_template_to_note_data(current: &NoteData, template: &Template) -> NoteData {
    if template.replaces_all() {
        debug!(template_id = %template.id, "replacing note from whole-note template");
        return normalize_note_data(&template.data);
    }

    let fields = template.scoped_fields();
    debug!(
        template_id = %template.id,
        fields = fields.len(),
        "overlaying scoped template"
    );

    let mut next = current.clone();
    for field in &fields {
        next.assign_field(*field, &template.data);
    }

    if fields.contains(&NoteField::ToothDiagnoses) {
        next.tooth_diagnoses = normalize_tooth_diagnoses(
            template.data.tooth_diagnoses.as_deref(),
            template.data.tooth_number.as_deref().unwrap_or_default(),
        );
    }
    if fields.contains(&NoteField::ToothNumber) && template.data.tooth_type.is_none() {
        next.tooth_type = classify_tooth(&next.tooth_number);
    }

    next
}

/// Build a complete note from template data, filling every unset field with
/// its initial value.
pub fn normalize_note_data(data: &PartialNoteData) -> NoteData {
    let mut note = NoteData::default();
    for field in NoteField::ALL {
        note.assign_field(*field, data);
    }

    note.tooth_diagnoses = normalize_tooth_diagnoses(
        data.tooth_diagnoses.as_deref(),
        data.tooth_number.as_deref().unwrap_or_default(),
    );
    if data.tooth_type.is_none() {
        note.tooth_type = classify_tooth(&note.tooth_number);
    }
    note
}

/// The data to store when saving `current` as a template with `scope`:
/// everything for a whole-note template, otherwise only the scoped fields.
pub fn capture_template_data(current: &NoteData, scope: &[TemplateScope]) -> PartialNoteData {
    let mut data = PartialNoteData::from(current);
    if scope.is_empty() || scope.contains(&TemplateScope::All) {
        return data;
    }

    let keep: Vec<NoteField> = scope.iter().flat_map(|s| s.fields()).copied().collect();
    for field in NoteField::ALL {
        if !keep.contains(field) {
            data.clear(*field);
        }
    }
    data
}
