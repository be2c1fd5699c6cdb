use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::eye::PerEye;
use super::factors::{
    AgeRange, Cct, CentralField, CupDiscRatio, FamilyHistory, Finding, MeanDeviation, Myopia,
    Notching, OcularModifier, PatientFactor, SystemicFactor,
};

/// Risk factors shared between both eyes.
///
/// The factor sets are `BTreeSet`s so a record serializes identically no
/// matter what order the aggregator discovered the factors in; the
/// idempotence contract is bytes-for-bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SharedRiskFactors {
    pub age_range: AgeRange,
    pub family_history: FamilyHistory,
    /// Count of active anti-glaucoma medications.
    pub num_agm: u8,
    pub patient_factors: BTreeSet<PatientFactor>,
    pub systemic_factors: BTreeSet<SystemicFactor>,
}

/// Risk factors recorded separately for each eye.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeRiskFactors {
    pub cdr: CupDiscRatio,
    pub notching: Notching,
    pub rnfl_defect: Finding,
    pub disc_hemorrhage: Finding,
    pub mean_deviation: MeanDeviation,
    pub central_field: CentralField,
    pub cct: Cct,
    pub myopia: Myopia,
    pub ocular_modifiers: BTreeSet<OcularModifier>,
}

/// The canonical normalized clinical state feeding the TRBS scorer.
///
/// Owned and mutated by the clinical-entry workflows (via the intake
/// aggregator); read-only input to scoring. The all-`Default` record is
/// the safe floor: every field sits on its zero-point option except age,
/// which defaults to the middle bracket as the entry forms do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactorRecord {
    pub shared: SharedRiskFactors,
    pub eyes: PerEye<EyeRiskFactors>,
}
