//! Per-procedure step records for surgical and vital-pulp procedures.
//!
//! Each record is only meaningful when its procedure appears in some tooth's
//! `treatment_performed`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A procedure step record: its treatment value plus labelled fields.
pub trait ProcedureRecord {
    /// The treatment value that activates this record.
    const PROCEDURE: &'static str;

    /// `(label, raw value)` pairs in display order.
    fn entries(&self) -> Vec<(&'static str, &str)>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProceduralSteps {
    pub apical_microsurgery: ApicalMicrosurgery,
    pub hemisection: Hemisection,
    pub root_resection: RootResection,
    pub apexification: Apexification,
    pub apexogenesis: Apexogenesis,
    pub regenerative_endo: RegenerativeEndo,
    pub intentional_replantation: IntentionalReplantation,
    pub autotransplantation: Autotransplantation,
}

/// A procedure value with its labelled entries.
pub type ProcedureEntries<'a> = (&'static str, Vec<(&'static str, &'a str)>);

impl ProceduralSteps {
    /// Every record in fixed display order.
    pub fn records(&self) -> Vec<ProcedureEntries<'_>> {
        fn pair<R: ProcedureRecord>(record: &R) -> ProcedureEntries<'_> {
            (R::PROCEDURE, record.entries())
        }
        vec![
            pair(&self.apical_microsurgery),
            pair(&self.hemisection),
            pair(&self.root_resection),
            pair(&self.apexification),
            pair(&self.apexogenesis),
            pair(&self.regenerative_endo),
            pair(&self.intentional_replantation),
            pair(&self.autotransplantation),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ApicalMicrosurgery {
    pub flap_design: String,
    pub osteotomy_size_mm: String,
    pub root_end_resection_mm: String,
    pub root_end_preparation: String,
    pub root_end_filling: String,
    pub sutures: String,
}

impl ProcedureRecord for ApicalMicrosurgery {
    const PROCEDURE: &'static str = "apical_microsurgery";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Flap", self.flap_design.as_str()),
            ("Osteotomy (mm)", self.osteotomy_size_mm.as_str()),
            ("Root-End Resection (mm)", self.root_end_resection_mm.as_str()),
            ("Root-End Preparation", self.root_end_preparation.as_str()),
            ("Root-End Filling", self.root_end_filling.as_str()),
            ("Sutures", self.sutures.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Hemisection {
    pub root_removed: String,
    pub section_method: String,
    pub retained_root_treatment: String,
}

impl ProcedureRecord for Hemisection {
    const PROCEDURE: &'static str = "hemisection";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Root Removed", self.root_removed.as_str()),
            ("Sectioning", self.section_method.as_str()),
            ("Retained Root", self.retained_root_treatment.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RootResection {
    pub root_resected: String,
    pub flap_design: String,
    pub furcation_seal: String,
}

impl ProcedureRecord for RootResection {
    const PROCEDURE: &'static str = "root_resection";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Root Resected", self.root_resected.as_str()),
            ("Flap", self.flap_design.as_str()),
            ("Furcation Seal", self.furcation_seal.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Apexification {
    pub barrier_material: String,
    pub barrier_thickness_mm: String,
    pub backfill: String,
}

impl ProcedureRecord for Apexification {
    const PROCEDURE: &'static str = "apexification";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Apical Barrier", self.barrier_material.as_str()),
            ("Barrier Thickness (mm)", self.barrier_thickness_mm.as_str()),
            ("Backfill", self.backfill.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Apexogenesis {
    pub pulpotomy_level: String,
    pub hemostasis_minutes: String,
    pub capping_material: String,
}

impl ProcedureRecord for Apexogenesis {
    const PROCEDURE: &'static str = "apexogenesis";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Pulpotomy", self.pulpotomy_level.as_str()),
            ("Hemostasis (min)", self.hemostasis_minutes.as_str()),
            ("Capping Material", self.capping_material.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RegenerativeEndo {
    pub disinfection: String,
    pub scaffold: String,
    pub barrier_material: String,
}

impl ProcedureRecord for RegenerativeEndo {
    const PROCEDURE: &'static str = "regenerative_endo";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Disinfection", self.disinfection.as_str()),
            ("Scaffold", self.scaffold.as_str()),
            ("Coronal Barrier", self.barrier_material.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IntentionalReplantation {
    pub extraoral_time_min: String,
    pub root_end_filling: String,
    pub splinting: String,
}

impl ProcedureRecord for IntentionalReplantation {
    const PROCEDURE: &'static str = "intentional_replantation";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Extraoral Time (min)", self.extraoral_time_min.as_str()),
            ("Root-End Filling", self.root_end_filling.as_str()),
            ("Splinting", self.splinting.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Autotransplantation {
    pub donor_tooth: String,
    pub recipient_site: String,
    pub extraoral_time_min: String,
    pub splinting: String,
}

impl ProcedureRecord for Autotransplantation {
    const PROCEDURE: &'static str = "autotransplantation";

    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Donor Tooth", self.donor_tooth.as_str()),
            ("Recipient Site", self.recipient_site.as_str()),
            ("Extraoral Time (min)", self.extraoral_time_min.as_str()),
            ("Splinting", self.splinting.as_str()),
        ]
    }
}
