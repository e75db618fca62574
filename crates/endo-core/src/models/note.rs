use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::anatomy::{ToothType, classify_tooth, is_bilateral_eligible};
use crate::models::diagnosis::ToothDiagnosis;
use crate::models::plan::ToothTreatmentPlan;
use crate::models::procedures::ProceduralSteps;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisitType {
    #[default]
    FirstVisit,
    ContinuingTreatment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnesthesiaSide {
    #[default]
    Rhs,
    Lhs,
    Bilateral,
}

impl AnesthesiaSide {
    pub fn as_str(self) -> &'static str {
        match self {
            AnesthesiaSide::Rhs => "rhs",
            AnesthesiaSide::Lhs => "lhs",
            AnesthesiaSide::Bilateral => "bilateral",
        }
    }
}

/// Declares [`NoteData`], its all-optional twin [`PartialNoteData`], and the
/// [`NoteField`] addressing enum from one field list, so the three can never
/// drift apart. Each field carries its initial value.
macro_rules! note_fields {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $field:ident : $ty:ty = $default:expr;
        )*
    ) => {
        /// One clinical encounter: everything the exam/treatment form collects.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
        #[serde(default)]
        #[ts(export)]
        pub struct NoteData {
            $(
                $(#[$meta])*
                pub $field: $ty,
            )*
        }

        impl Default for NoteData {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        /// A saved template's payload: any subset of [`NoteData`]'s fields.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
        #[serde(default)]
        #[ts(export)]
        pub struct PartialNoteData {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                #[ts(optional)]
                pub $field: Option<$ty>,
            )*
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NoteField {
            $( $variant, )*
        }

        impl NoteField {
            pub const ALL: &'static [NoteField] = &[ $( NoteField::$variant, )* ];
        }

        impl NoteData {
            /// Overwrite `field` with an owned copy of the template's value,
            /// or with its initial value when the template leaves it unset.
            pub fn assign_field(&mut self, field: NoteField, source: &PartialNoteData) {
                match field {
                    $(
                        NoteField::$variant => {
                            self.$field = match &source.$field {
                                Some(value) => value.clone(),
                                None => $default,
                            };
                        }
                    )*
                }
            }
        }

        impl PartialNoteData {
            pub fn is_set(&self, field: NoteField) -> bool {
                match field {
                    $( NoteField::$variant => self.$field.is_some(), )*
                }
            }

            pub fn clear(&mut self, field: NoteField) {
                match field {
                    $( NoteField::$variant => self.$field = None, )*
                }
            }
        }

        impl From<&NoteData> for PartialNoteData {
            fn from(data: &NoteData) -> Self {
                Self {
                    $( $field: Some(data.$field.clone()), )*
                }
            }
        }
    };
}

note_fields! {
    // Identity / visit
    PatientName => patient_name: String = String::new();
    PatientChartNumber => patient_chart_number: String = String::new();
    PatientDob => patient_dob: String = String::new();
    /// Visit date as entered by the date picker.
    Date => date: String = String::new();
    VisitType => visit_type: VisitType = VisitType::FirstVisit;
    ToothNumber => tooth_number: String = String::new();
    /// Derived from `tooth_number`; see [`NoteData::set_tooth_number`].
    ToothType => tooth_type: Option<ToothType> = None;

    // Subjective
    BloodPressure => blood_pressure: String = String::new();
    Pulse => pulse: String = String::new();
    RespiratoryRate => respiratory_rate: String = String::new();
    MedicalAlerts => medical_alerts: Vec<String> = Vec::new();
    ChiefComplaints => chief_complaints: Vec<String> = Vec::new();
    /// Replaces the `other` chief complaint.
    ChiefComplaintOther => chief_complaint_other: String = String::new();
    PainCharacteristics => pain_characteristics: Vec<String> = Vec::new();
    PainDuration => pain_duration: String = String::new();

    // Objective
    ColdTest => cold_test: String = String::new();
    EptTest => ept_test: String = String::new();
    HeatTest => heat_test: String = String::new();
    Percussion => percussion: String = String::new();
    Palpation => palpation: String = String::new();
    Probing => probing: String = String::new();
    Mobility => mobility: String = String::new();
    Swelling => swelling: Vec<String> = Vec::new();
    SinusTract => sinus_tract: bool = false;
    RadiographicFindings => radiographic_findings: Vec<String> = Vec::new();
    ObjectiveNotes => objective_notes: String = String::new();

    // Assessment
    /// Never empty: the initial value holds one blank entry.
    ToothDiagnoses => tooth_diagnoses: Vec<ToothDiagnosis> = vec![ToothDiagnosis::new()];
    AssessmentNotes => assessment_notes: String = String::new();

    // Plan
    TreatmentOptionsOffered => treatment_options_offered: Vec<String> = Vec::new();
    /// Single-tooth treatment value read by the referral letter.
    TreatmentPerformed => treatment_performed: String = String::new();
    ConsentGiven => consent_given: bool = false;
    AnesthesiaTypes => anesthesia_types: Vec<String> = Vec::new();
    /// Carpules per anesthetic, as typed.
    AnesthesiaAmounts => anesthesia_amounts: BTreeMap<String, String> = BTreeMap::new();
    AnesthesiaLocations => anesthesia_locations: Vec<String> = Vec::new();
    /// Which anesthetics went to which location; only kept with >1 anesthetic.
    AnesthesiaLocationMapping => anesthesia_location_mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
    AnesthesiaLocationSides => anesthesia_location_sides: BTreeMap<String, AnesthesiaSide> = BTreeMap::new();
    Isolation => isolation: String = String::new();
    ToothTreatmentPlans => tooth_treatment_plans: Vec<ToothTreatmentPlan> = Vec::new();
    ProceduralSteps => procedural_steps: ProceduralSteps = ProceduralSteps::default();
    Irrigation => irrigation: Vec<String> = Vec::new();
    Medicament => medicament: String = String::new();
    Complications => complications: Vec<String> = Vec::new();
    PostOpInstructions => post_op_instructions: Vec<String> = Vec::new();
    AdditionalNotes => additional_notes: String = String::new();
    NextVisit => next_visit: String = String::new();
    FollowUp => follow_up: String = String::new();
    Referral => referral: String = String::new();

    // Referral letter
    ReferringDoctor => referring_doctor: String = String::new();
    ConsultationDate => consultation_date: String = String::new();
    TreatmentCompletionDate => treatment_completion_date: String = String::new();
    ReferralComments => referral_comments: String = String::new();
}

impl NoteData {
    /// Set the primary tooth number and re-derive its tooth type.
    pub fn set_tooth_number(&mut self, tooth_number: &str) {
        self.tooth_number = tooth_number.to_string();
        self.tooth_type = classify_tooth(tooth_number);
    }

    pub fn is_first_visit(&self) -> bool {
        self.visit_type == VisitType::FirstVisit
    }

    /// Replace the anesthetic list. With one anesthetic or none, the
    /// per-location mapping carries no information and is cleared.
    pub fn set_anesthesia_types(&mut self, types: Vec<String>) {
        self.anesthesia_amounts.retain(|t, _| types.contains(t));
        self.anesthesia_types = types;
        if self.anesthesia_types.len() <= 1 {
            self.anesthesia_location_mapping.clear();
        } else {
            let types = &self.anesthesia_types;
            for anesthetics in self.anesthesia_location_mapping.values_mut() {
                anesthetics.retain(|a| types.contains(a));
            }
        }
    }

    /// Replace the location list. New bilateral-eligible locations start on
    /// the right-hand side; removed locations lose their side and mapping.
    pub fn set_anesthesia_locations(&mut self, locations: Vec<String>) {
        self.anesthesia_location_sides
            .retain(|location, _| locations.contains(location));
        self.anesthesia_location_mapping
            .retain(|location, _| locations.contains(location));
        for location in &locations {
            if is_bilateral_eligible(location) {
                self.anesthesia_location_sides
                    .entry(location.clone())
                    .or_default();
            }
        }
        self.anesthesia_locations = locations;
    }

    /// Whether any plan lists `procedure` among its treatments.
    pub fn has_procedure(&self, procedure: &str) -> bool {
        self.tooth_treatment_plans
            .iter()
            .any(|plan| plan.treatment_performed.iter().any(|t| t == procedure))
    }
}
