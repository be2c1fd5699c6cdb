use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::baseline::BaselineIop;
use super::eye::PerEye;
use super::result::RiskTier;

/// The approved target for one eye, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeTarget {
    /// What the TRBS calculation produced.
    pub calculated_target_mmhg: f64,
    /// What the clinician approved; equals the calculated value unless
    /// overridden.
    pub final_target_mmhg: f64,
    pub trbs_score: u8,
    pub risk_tier: RiskTier,
    pub baseline: BaselineIop,
    pub overridden: bool,
    /// Required whenever `overridden` is true.
    pub override_reason: Option<String>,
}

/// The durable artifact of an approved target-IOP calculation.
///
/// Exactly one record is current per patient: a new save fully replaces
/// the previous one. Downstream IOP-control tracking compares live
/// measurements against `final_target_mmhg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TargetRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub eyes: PerEye<EyeTarget>,
    pub set_by: String,
    pub set_at: jiff::Timestamp,
}
