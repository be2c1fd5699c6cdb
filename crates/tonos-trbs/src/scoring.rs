//! Per-eye TRBS scoring and target derivation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tonos_core::models::{
    BaselineIop, DomainScores, Eye, PatientFactor, RiskFactorRecord, RiskTier, TrbsResult,
};

use crate::error::TrbsError;
use crate::tables;

/// Calculated targets are never pushed below this pressure; lower values
/// risk hypotony.
pub const TARGET_FLOOR_MMHG: f64 = 6.0;

/// Structural domain cap: CDR 4 + bipolar notch 3 + RNFL 1 + hemorrhage 1
/// would reach 9, but the domain is defined as 0–8.
const STRUCTURAL_DOMAIN_CAP: u8 = 8;

/// Ocular-modifier domain is defined as 0–5 even though thin cornea,
/// high myopia, and all four modifiers would sum to 7.
const OCULAR_DOMAIN_CAP: u8 = 5;

const DEMOGRAPHIC_DOMAIN_CAP: u8 = 4;

/// The baseline-independent part of a single-eye calculation: score,
/// tier, and reduction. Tier and reduction are functions of the score
/// alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeScore {
    pub eye: Eye,
    pub score: u8,
    pub risk_tier: RiskTier,
    pub reduction_percent: u8,
    pub domain_scores: DomainScores,
}

/// Score each of the seven domains for one eye.
///
/// Domains A, B, E, and G read the shared factors; C, D, and F read the
/// per-eye factors. The total is the plain sum of these, deliberately
/// not clamped, so a table regression shows up as an out-of-range score
/// instead of being masked.
pub fn score_domains(record: &RiskFactorRecord, eye: Eye) -> DomainScores {
    let shared = &record.shared;
    let factors = record.eyes.get(eye);

    let demographic = (tables::age_points(shared.age_range)
        + tables::family_history_points(shared.family_history))
    .min(DEMOGRAPHIC_DOMAIN_CAP);

    let medication = tables::medication_points(shared.num_agm);

    let structural = (tables::cdr_points(factors.cdr)
        + tables::notching_points(factors.notching)
        + tables::finding_points(factors.rnfl_defect)
        + tables::finding_points(factors.disc_hemorrhage))
    .min(STRUCTURAL_DOMAIN_CAP);

    let functional = tables::mean_deviation_points(factors.mean_deviation)
        + tables::central_field_points(factors.central_field);

    let patient = shared
        .patient_factors
        .iter()
        .map(|f| match f {
            PatientFactor::OneEyedOrAdvancedFellow => 2,
            PatientFactor::PoorCompliance => 1,
        })
        .sum::<u8>();

    let ocular = (tables::cct_points(factors.cct)
        + tables::myopia_points(factors.myopia)
        + factors.ocular_modifiers.len() as u8)
        .min(OCULAR_DOMAIN_CAP);

    let systemic = shared.systemic_factors.len() as u8;

    DomainScores {
        demographic,
        medication,
        structural,
        functional,
        patient,
        ocular,
        systemic,
    }
}

/// Score one eye. Pure; the other eye's findings never influence the
/// result.
pub fn score_eye(record: &RiskFactorRecord, eye: Eye) -> EyeScore {
    let domain_scores = score_domains(record, eye);
    let score = domain_scores.total();
    let tier = risk_tier(score);
    EyeScore {
        eye,
        score,
        risk_tier: tier,
        reduction_percent: reduction_percent(tier),
        domain_scores,
    }
}

/// Map a total TRBS score to its risk tier. Fixed thresholds.
pub fn risk_tier(score: u8) -> RiskTier {
    match score {
        0..=6 => RiskTier::Low,
        7..=12 => RiskTier::Moderate,
        13..=18 => RiskTier::High,
        _ => RiskTier::VeryHigh,
    }
}

/// Percentage IOP reduction for a tier (upper-bound policy).
pub fn reduction_percent(tier: RiskTier) -> u8 {
    match tier {
        RiskTier::Low => 20,
        RiskTier::Moderate => 30,
        RiskTier::High => 40,
        RiskTier::VeryHigh => 50,
    }
}

fn round_to_half_mmhg(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Target = baseline × (1 − reduction%), rounded to the nearest 0.5 mmHg
/// and floored at [`TARGET_FLOOR_MMHG`].
///
/// The 0.5 mmHg rounding granularity is a documented decision pending
/// clinical sign-off; tonometry is not read finer than that.
pub fn calculated_target(baseline_mmhg: f64, tier: RiskTier) -> f64 {
    let pct = f64::from(reduction_percent(tier));
    let raw = baseline_mmhg * (1.0 - pct / 100.0);
    round_to_half_mmhg(raw).max(TARGET_FLOOR_MMHG)
}

/// Full single-eye evaluation: score, tier, reduction, and target.
///
/// Fails only when no baseline is supplied; an error for one eye never
/// blocks evaluating the other.
pub fn evaluate(
    record: &RiskFactorRecord,
    eye: Eye,
    baseline: Option<BaselineIop>,
) -> Result<TrbsResult, TrbsError> {
    let baseline = baseline.ok_or(TrbsError::MissingBaseline { eye })?;
    let eye_score = score_eye(record, eye);
    let target = calculated_target(baseline.value_mmhg, eye_score.risk_tier);

    Ok(TrbsResult {
        eye,
        score: eye_score.score,
        risk_tier: eye_score.risk_tier,
        reduction_percent: eye_score.reduction_percent,
        baseline,
        calculated_target_mmhg: target,
        domain_scores: eye_score.domain_scores,
    })
}
