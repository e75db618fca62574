use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::anatomy::ToothType;
use crate::models::note::{NoteField, PartialNoteData, VisitType};

/// Which part of a note a template applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateScope {
    All,
    Subjective,
    Objective,
    Assessment,
    Plan,
    Referral,
}

impl TemplateScope {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateScope::All => "all",
            TemplateScope::Subjective => "subjective",
            TemplateScope::Objective => "objective",
            TemplateScope::Assessment => "assessment",
            TemplateScope::Plan => "plan",
            TemplateScope::Referral => "referral",
        }
    }

    /// Fields a scoped template overwrites. `All` replaces the whole record
    /// and so has no field list of its own.
    pub fn fields(self) -> &'static [NoteField] {
        use NoteField as F;
        match self {
            TemplateScope::All => NoteField::ALL,
            TemplateScope::Subjective => &[
                F::VisitType,
                F::BloodPressure,
                F::Pulse,
                F::RespiratoryRate,
                F::MedicalAlerts,
                F::ChiefComplaints,
                F::ChiefComplaintOther,
                F::PainCharacteristics,
                F::PainDuration,
            ],
            TemplateScope::Objective => &[
                F::ColdTest,
                F::EptTest,
                F::HeatTest,
                F::Percussion,
                F::Palpation,
                F::Probing,
                F::Mobility,
                F::Swelling,
                F::SinusTract,
                F::RadiographicFindings,
                F::ObjectiveNotes,
            ],
            TemplateScope::Assessment => &[
                F::ToothNumber,
                F::ToothType,
                F::ToothDiagnoses,
                F::AssessmentNotes,
            ],
            TemplateScope::Plan => &[
                F::TreatmentOptionsOffered,
                F::TreatmentPerformed,
                F::ConsentGiven,
                F::AnesthesiaTypes,
                F::AnesthesiaAmounts,
                F::AnesthesiaLocations,
                F::AnesthesiaLocationMapping,
                F::AnesthesiaLocationSides,
                F::Isolation,
                F::ToothTreatmentPlans,
                F::ProceduralSteps,
                F::Irrigation,
                F::Medicament,
                F::Complications,
                F::PostOpInstructions,
                F::AdditionalNotes,
                F::NextVisit,
                F::FollowUp,
                F::Referral,
            ],
            TemplateScope::Referral => &[F::ReferringDoctor, F::ReferralComments],
        }
    }
}

/// A saved, possibly partial, note used to pre-fill the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub data: PartialNoteData,
    #[serde(default)]
    pub scope: Vec<TemplateScope>,
    #[serde(default)]
    pub visit_type: Option<VisitType>,
    #[serde(default)]
    pub tooth_type: Option<ToothType>,
    #[serde(default)]
    pub procedure_types: Vec<String>,
    pub created_at: jiff::Timestamp,
}

impl Template {
    /// True when the template replaces the whole note. An empty scope list
    /// is treated as a whole-note template.
    pub fn replaces_all(&self) -> bool {
        self.scope.is_empty() || self.scope.contains(&TemplateScope::All)
    }

    /// The union of the scopes' field lists, in first-seen order.
    pub fn scoped_fields(&self) -> Vec<NoteField> {
        let mut fields = Vec::new();
        for scope in &self.scope {
            for field in scope.fields() {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
        }
        fields
    }
}
