//! tonos-intake
//!
//! The risk-factor aggregator: normalizes raw clinical-entry records
//! (fundus exam free text, visual-field results, systemic history
//! toggles, refraction, blood pressure, pachymetry, gonioscopy) into the
//! canonical [`RiskFactorRecord`] the TRBS scorer consumes.
//!
//! Aggregation is a pure transform over a snapshot of one patient's
//! inputs: running it twice on unchanged inputs yields a byte-identical
//! record, and derived flags (like low ocular perfusion) always reflect
//! the current inputs rather than accumulating history. Unparseable
//! free-text fields fall back to the zero-point bucket; missing data
//! must never inflate a risk score.
//!
//! [`RiskFactorRecord`]: tonos_core::models::RiskFactorRecord

pub mod aggregate;
pub mod inputs;
pub mod parse;

pub use aggregate::{LOW_PERFUSION_DOPP_MMHG, aggregate};
pub use inputs::{
    ClinicalInputs, FundusEyeInput, HistoryToggles, InvestigationInput, RefractionEyeInput,
    VisualFieldEyeInput,
};
