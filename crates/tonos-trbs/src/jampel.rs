//! Jampel target-pressure formula, offered alongside TRBS as an
//! alternative calculation method (HD Jampel, 1997, as standardized by
//! the major international glaucoma guidelines).
//!
//! The Jampel pathway has its own risk vocabulary and grading and is
//! never mixed with the TRBS tables: thirteen guideline risk factors
//! rated low/moderate/high feed a disease grade, and the grade plus
//! disease stage selects a percentage-reduction band that yields a
//! target range per eye rather than a single value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tonos_core::models::{Eye, PerEye};

/// Severity rating for one Jampel risk factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JampelRating {
    #[default]
    Low,
    Moderate,
    High,
}

/// The thirteen guideline risk factors of the Jampel formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JampelFactor {
    BaselineIopHigh,
    AgeAdvanced,
    FamilyHistory,
    EthnicityAfricanDescent,
    CentralCornealThicknessThin,
    OpticDiscSizeSmall,
    VerticalCupDiscRatioLarge,
    PseudoexfoliationSyndrome,
    PigmentDispersionSyndrome,
    PreviousIschemicEvents,
    MyopiaHigh,
    Diabetes,
    SystemicHypertension,
}

/// Points for a factor at a rating. Most factors score 0/1/2; the two
/// dispersion syndromes are all-or-nothing, and the vascular
/// comorbidities top out at 1.
pub fn factor_points(factor: JampelFactor, rating: JampelRating) -> u8 {
    use JampelFactor::*;
    use JampelRating::*;
    match (factor, rating) {
        (_, Low) => 0,
        (PseudoexfoliationSyndrome | PigmentDispersionSyndrome, Moderate) => 0,
        (_, Moderate) => 1,
        (Diabetes | SystemicHypertension, High) => 1,
        (_, High) => 2,
    }
}

/// Disease grade from total risk points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JampelGrade {
    /// 0-2 points, low risk.
    Grade0,
    /// 3-4 points, low-moderate risk.
    Grade1,
    /// 5-6 points, moderate risk.
    Grade2,
    /// 7+ points, high risk.
    Grade3,
}

impl std::fmt::Display for JampelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JampelGrade::Grade0 => write!(f, "Grade 0 (Low Risk)"),
            JampelGrade::Grade1 => write!(f, "Grade 1 (Low-Moderate Risk)"),
            JampelGrade::Grade2 => write!(f, "Grade 2 (Moderate Risk)"),
            JampelGrade::Grade3 => write!(f, "Grade 3 (High Risk)"),
        }
    }
}

/// Sum the rated factors. Unrated factors contribute nothing.
pub fn total_points(ratings: &BTreeMap<JampelFactor, JampelRating>) -> u8 {
    ratings
        .iter()
        .map(|(factor, rating)| factor_points(*factor, *rating))
        .sum()
}

pub fn grade(total_points: u8) -> JampelGrade {
    match total_points {
        0..=2 => JampelGrade::Grade0,
        3..=4 => JampelGrade::Grade1,
        5..=6 => JampelGrade::Grade2,
        _ => JampelGrade::Grade3,
    }
}

/// How far the disease has progressed; scales the reduction band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiseaseStage {
    #[default]
    Early,
    Moderate,
    Advanced,
}

fn stage_modifier(stage: DiseaseStage) -> f64 {
    match stage {
        DiseaseStage::Early => 0.9,
        DiseaseStage::Moderate => 1.0,
        DiseaseStage::Advanced => 1.2,
    }
}

/// (min, standard, max) fractional reductions for a grade.
fn grade_reductions(grade: JampelGrade) -> (f64, f64, f64) {
    match grade {
        JampelGrade::Grade0 => (0.15, 0.20, 0.25),
        JampelGrade::Grade1 => (0.20, 0.25, 0.30),
        JampelGrade::Grade2 => (0.25, 0.30, 0.35),
        JampelGrade::Grade3 => (0.40, 0.45, 0.50),
    }
}

/// A Jampel target range for one eye. Unlike the single TRBS target, the
/// formula yields a band: `min_mmhg` is the aggressive end (largest
/// reduction), `max_mmhg` the conservative end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JampelRange {
    pub min_mmhg: f64,
    pub target_mmhg: f64,
    pub max_mmhg: f64,
    /// The standard (mid-band) reduction before stage scaling.
    pub reduction_percent: u8,
    pub baseline_mmhg: f64,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derive one eye's target range from its baseline, the shared grade,
/// and the disease stage.
///
/// The floors (8/10/12 mmHg for min/target/max) guard against hypotonous
/// targets on low baselines; after flooring the band is re-ordered so
/// min ≤ target ≤ max always holds.
pub fn target_range(baseline_mmhg: f64, grade: JampelGrade, stage: DiseaseStage) -> JampelRange {
    let (min_frac, standard_frac, max_frac) = grade_reductions(grade);
    let modifier = stage_modifier(stage);

    let mut min_mmhg = (baseline_mmhg - baseline_mmhg * max_frac * modifier).max(8.0);
    let target_mmhg = (baseline_mmhg - baseline_mmhg * standard_frac * modifier).max(10.0);
    let mut max_mmhg = (baseline_mmhg - baseline_mmhg * min_frac * modifier).max(12.0);

    min_mmhg = min_mmhg.min(target_mmhg);
    max_mmhg = max_mmhg.max(target_mmhg);

    JampelRange {
        min_mmhg: round_to_tenth(min_mmhg),
        target_mmhg: round_to_tenth(target_mmhg),
        max_mmhg: round_to_tenth(max_mmhg),
        reduction_percent: (standard_frac * 100.0).round() as u8,
        baseline_mmhg,
    }
}

/// The full two-eye Jampel calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JampelResult {
    pub grade: JampelGrade,
    pub total_points: u8,
    pub stage: DiseaseStage,
    pub eyes: PerEye<JampelRange>,
}

/// Grade once from the shared factor ratings, then range both eyes from
/// their own baselines.
pub fn complete_target(
    baselines_mmhg: PerEye<f64>,
    ratings: &BTreeMap<JampelFactor, JampelRating>,
    stage: DiseaseStage,
) -> JampelResult {
    let points = total_points(ratings);
    let grade = grade(points);

    JampelResult {
        grade,
        total_points: points,
        stage,
        eyes: PerEye::from_fn(|eye: Eye| target_range(*baselines_mmhg.get(eye), grade, stage)),
    }
}
