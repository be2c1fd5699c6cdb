use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::baseline::BaselineIop;
use super::eye::Eye;

/// Risk tier derived from the total TRBS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Moderate => write!(f, "Moderate"),
            RiskTier::High => write!(f, "High"),
            RiskTier::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Per-domain breakdown of a TRBS score, kept for display and audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScores {
    pub demographic: u8,
    pub medication: u8,
    pub structural: u8,
    pub functional: u8,
    pub patient: u8,
    pub ocular: u8,
    pub systemic: u8,
}

impl DomainScores {
    pub fn total(&self) -> u8 {
        self.demographic
            + self.medication
            + self.structural
            + self.functional
            + self.patient
            + self.ocular
            + self.systemic
    }
}

/// Result of a target-IOP calculation for one eye.
///
/// A pure derived value, recomputed on demand and never persisted
/// directly; the persisted artifact is `TargetRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrbsResult {
    pub eye: Eye,
    pub score: u8,
    pub risk_tier: RiskTier,
    pub reduction_percent: u8,
    pub baseline: BaselineIop,
    pub calculated_target_mmhg: f64,
    pub domain_scores: DomainScores,
}
