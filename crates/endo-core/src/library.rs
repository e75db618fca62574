//! The user's saved templates.
//!
//! Templates are created by an explicit save, changed only by rename or
//! overwrite, and removed by an explicit delete. Saving under a name that is
//! already taken fails unless the caller has confirmed the overwrite.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::anatomy::ToothType;
use crate::error::CoreError;
use crate::models::note::{PartialNoteData, VisitType};
use crate::models::template::{Template, TemplateScope};

/// Everything needed to save a template except its identity.
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    pub name: String,
    pub data: PartialNoteData,
    pub scope: Vec<TemplateScope>,
    pub visit_type: Option<VisitType>,
    pub tooth_type: Option<ToothType>,
    pub procedure_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Templates in the order they were first saved.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: Uuid) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Case-insensitive lookup, matching how names collide on save.
    pub fn find_by_name(&self, name: &str) -> Option<&Template> {
        let wanted = name.trim();
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(wanted))
    }

    /// Save a template. A name collision is an error unless `overwrite` is
    /// set, in which case the existing template keeps its id and creation
    /// time and takes the draft's content.
    pub fn save(&mut self, draft: TemplateDraft, overwrite: bool) -> Result<&Template, CoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        let scope = if draft.scope.is_empty() {
            vec![TemplateScope::All]
        } else {
            draft.scope
        };

        if let Some(index) = self
            .templates
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(&name))
        {
            if !overwrite {
                return Err(CoreError::TemplateExists(name));
            }
            let existing = &mut self.templates[index];
            existing.name = name;
            existing.data = draft.data;
            existing.scope = scope;
            existing.visit_type = draft.visit_type;
            existing.tooth_type = draft.tooth_type;
            existing.procedure_types = draft.procedure_types;
            info!(template_id = %existing.id, "template overwritten");
            return Ok(&self.templates[index]);
        }

        let template = Template {
            id: Uuid::new_v4(),
            name,
            data: draft.data,
            scope,
            visit_type: draft.visit_type,
            tooth_type: draft.tooth_type,
            procedure_types: draft.procedure_types,
            created_at: jiff::Timestamp::now(),
        };
        info!(template_id = %template.id, name = %template.name, "template saved");
        self.templates.push(template);
        Ok(&self.templates[self.templates.len() - 1])
    }

    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Result<(), CoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if self
            .templates
            .iter()
            .any(|t| t.id != id && t.name.eq_ignore_ascii_case(new_name))
        {
            return Err(CoreError::TemplateExists(new_name.to_string()));
        }
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::TemplateNotFound(id))?;
        template.name = new_name.to_string();
        Ok(())
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Template, CoreError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TemplateNotFound(id))?;
        info!(template_id = %id, "template deleted");
        Ok(self.templates.remove(index))
    }

    /// Templates whose tags fit the current visit. An untagged template
    /// matches everything.
    pub fn matching(
        &self,
        visit_type: VisitType,
        tooth_type: Option<ToothType>,
    ) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| {
            t.visit_type.is_none_or(|v| v == visit_type)
                && (t.tooth_type.is_none() || tooth_type.is_none() || t.tooth_type == tooth_type)
        })
    }
}
