//! tonos-trbs
//!
//! The Total Risk Burden Score (TRBS) engine: per-eye risk scoring across
//! seven weighted domains, risk-tier and reduction-percentage mapping,
//! untreated-baseline derivation from medication count, and target-IOP
//! calculation. The point tables are a clinically validated external
//! contract and must not be altered. The [`jampel`] module carries the
//! Jampel 1997 formula as an alternative calculation pathway with its
//! own vocabulary.
//!
//! Everything here is a pure function of its inputs: no I/O, no hidden
//! state.

pub mod baseline;
pub mod error;
pub mod jampel;
pub mod scoring;
pub mod tables;

pub use baseline::{agm_adjustment_mmhg, untreated_baseline};
pub use error::TrbsError;
pub use scoring::{
    EyeScore, TARGET_FLOOR_MMHG, calculated_target, evaluate, reduction_percent, risk_tier,
    score_domains, score_eye,
};
