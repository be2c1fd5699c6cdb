//! tonos-targets
//!
//! The approval side of the target-IOP workflow: a clinician accepts or
//! overrides each eye's calculated target (an override requires a
//! written reason), the approved pair is persisted atomically as the
//! patient's current [`TargetRecord`], and downstream tracking classifies
//! live IOP measurements against the approved target. The [`stratify`]
//! module rolls visit-level IOP, RNFL, and visual-field trends up into a
//! risk level with a follow-up recommendation.
//!
//! [`TargetRecord`]: tonos_core::models::TargetRecord

pub mod audit;
pub mod error;
pub mod status;
pub mod store;
pub mod stratify;
pub mod workflow;

pub use audit::AuditEvent;
pub use error::TargetError;
pub use status::{TargetStatus, WITHIN_TOLERANCE_MMHG, classify_iop};
pub use store::TargetStore;
pub use stratify::{
    Adherence, DiseaseSeverity, Progression, RiskAssessment, RiskLevel, StratificationInputs,
    assess_rnfl_progression, assess_vf_progression, calculate_risk, iop_severity,
    recommend_followup,
};
pub use workflow::{EyeDecision, TargetDraft};
