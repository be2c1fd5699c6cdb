//! Closed risk-factor vocabularies.
//!
//! Every field the TRBS scorer consumes has a fixed, closed domain. The
//! serde labels below are the canonical wire vocabulary shared with the
//! clinical-entry frontend; an out-of-domain label is rejected at the
//! parse boundary (`parse_label`), never silently coerced into a bucket.
//! Each enum's `Default` is its zero-point option, so missing upstream
//! data can never inflate a risk score.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use ts_rs::TS;

use crate::error::CoreError;

/// Parse a canonical label into one of the closed vocabularies.
///
/// `field` names the offending record field in the error, per the
/// aggregation contract: reject, don't guess.
pub fn parse_label<T: DeserializeOwned>(field: &'static str, value: &str) -> Result<T, CoreError> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|_| {
        CoreError::InvalidRiskFactor {
            field,
            value: value.to_string(),
        }
    })
}

/// Patient age bracket. Younger onset carries more lifetime risk, so the
/// points run opposite to age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeRange {
    #[serde(rename = "under_50")]
    Under50,
    #[default]
    #[serde(rename = "50_to_70")]
    FiftyTo70,
    #[serde(rename = "over_70")]
    Over70,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FamilyHistory {
    #[default]
    Absent,
    Present,
}

/// A generic absent/present clinical finding (RNFL defect, disc
/// hemorrhage).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Finding {
    #[default]
    Absent,
    Present,
}

impl Finding {
    pub fn is_present(self) -> bool {
        self == Finding::Present
    }
}

/// Vertical cup-to-disc ratio bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CupDiscRatio {
    #[default]
    #[serde(rename = "0.5_or_less")]
    HalfOrLess,
    #[serde(rename = "0.6")]
    PointSix,
    #[serde(rename = "0.7")]
    PointSeven,
    #[serde(rename = "0.8")]
    PointEight,
    #[serde(rename = "0.9_or_more")]
    PointNineOrMore,
}

/// Neuroretinal rim notching. The intake layer deliberately collapses any
/// notch wording to `Bipolar`; `Unipolar` remains in the vocabulary for
/// records entered directly on the risk form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Notching {
    #[default]
    Absent,
    Unipolar,
    Bipolar,
}

/// Humphrey visual field mean deviation bucket, in decibels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeanDeviation {
    #[default]
    HfaNotDone,
    #[serde(rename = "greater_than_minus_6")]
    GreaterThanMinus6,
    #[serde(rename = "minus_6_to_minus_12")]
    Minus6ToMinus12,
    #[serde(rename = "minus_12_to_minus_20")]
    Minus12ToMinus20,
    #[serde(rename = "less_than_minus_20")]
    LessThanMinus20,
    HfaNotPossible,
}

/// Whether the field defect involves the central 10 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CentralField {
    #[default]
    No,
    Yes,
}

/// Central corneal thickness category. Thin corneas (<500 µm on
/// pachymetry) under-read applanation IOP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Cct {
    #[default]
    Normal,
    Thin,
}

/// Myopia severity, derived from refractive sphere power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Myopia {
    #[default]
    None,
    LowMyopia,
    ModHighMyopia,
}

/// Per-eye ocular risk modifiers, each worth one point when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OcularModifier {
    AngleRecession,
    Pseudoexfoliation,
    PigmentDispersion,
    SteroidResponder,
}

/// Shared systemic risk factors, each worth one point when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SystemicFactor {
    LowOcularPerfusion,
    MigraineVasospasm,
    Raynauds,
    SleepApnea,
    DiabetesMellitus,
}

/// Shared disease/patient factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientFactor {
    OneEyedOrAdvancedFellow,
    PoorCompliance,
}
