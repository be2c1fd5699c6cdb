//! Boundary records handed to the aggregator by the clinical-entry
//! modules. Field shapes follow the upstream forms: free text where the
//! forms collect free text, typed values where they collect numbers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tonos_core::models::{PatientFactor, PerEye};

/// Named boolean flags from the systemic-history form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryToggles {
    pub family_glaucoma: bool,
    pub diabetes: bool,
    pub migraine: bool,
    pub raynauds: bool,
    pub sleep_apnea: bool,
    pub hypertension: bool,
    pub cardiac: bool,
}

/// One eye's fields from the fundus-exam form, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundusEyeInput {
    /// Cup-disc ratio as written, e.g. "0.7" or "CDR 0.85".
    pub cdr: Option<String>,
    /// Notch description, e.g. "inferior notch" or "no notch".
    pub notch: Option<String>,
    /// Background retina description; scanned for hemorrhage wording.
    pub background_retina: Option<String>,
    /// RNFL defect field, "present" or "absent".
    pub rnfl: Option<String>,
}

/// One eye's visual-field result. A missing record altogether means the
/// test was not done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualFieldEyeInput {
    /// Mean deviation in decibels.
    pub md_db: Option<f64>,
    /// False when the test's reliability indices failed.
    pub reliable: bool,
    /// Defect involves the central 10 degrees.
    pub central_10_degrees: bool,
}

/// One eye's refraction entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefractionEyeInput {
    /// Sphere power as written, e.g. "-3.50 DS" or "+1.00".
    pub sphere: Option<String>,
}

/// Investigation-section values used for CCT, ocular modifiers, and the
/// diastolic ocular perfusion pressure derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestigationInput {
    /// Blood pressure as written, e.g. "140/80" or "140 / 80 mm Hg".
    pub blood_pressure: Option<String>,
    /// Current (treated) IOP per eye, mmHg.
    pub current_iop_mmhg: PerEye<Option<f64>>,
    /// Pachymetry per eye, e.g. "495 µm".
    pub pachymetry: PerEye<Option<String>>,
    /// Gonioscopy description per eye; scanned for modifier keywords.
    pub gonioscopy: PerEye<Option<String>>,
}

/// Snapshot of everything the aggregator reads for one patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalInputs {
    pub age_years: Option<u16>,
    /// Count of active anti-glaucoma medications.
    pub num_agm: u8,
    pub history: Option<HistoryToggles>,
    /// Entered directly on the risk form rather than derived.
    pub patient_factors: BTreeSet<PatientFactor>,
    pub fundus: Option<PerEye<FundusEyeInput>>,
    pub visual_field: PerEye<Option<VisualFieldEyeInput>>,
    pub refraction: PerEye<Option<RefractionEyeInput>>,
    pub investigations: Option<InvestigationInput>,
    /// Diagnosis lines; scanned for ocular modifier keywords, with
    /// RE/LE wording routing a line to one eye.
    pub diagnoses: Vec<String>,
}
