//! Per-eye accept/override state machine.
//!
//! Each eye starts in `Calculated` (final target = calculated target).
//! Overriding records the clinician's value and, before a save is
//! permitted, a non-empty reason. A fresh calculation always resets both
//! eyes to `Calculated`, discarding any prior override.

use uuid::Uuid;

use tonos_core::models::{Eye, EyeTarget, PerEye, TargetRecord, TrbsResult};

use crate::error::TargetError;

/// The clinician's standing decision for one eye.
#[derive(Debug, Clone, PartialEq)]
pub enum EyeDecision {
    /// Accept the calculated target as-is.
    Calculated,
    /// Replace the calculated target. `reason` must be non-blank by save
    /// time.
    Overridden { final_target_mmhg: f64, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
struct EyeWorkflow {
    calc: TrbsResult,
    decision: EyeDecision,
}

/// A calculation cycle awaiting approval: both eyes' results plus the
/// clinician's decisions. Terminal state is the atomic save of a
/// [`TargetRecord`]; partial per-eye saves are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDraft {
    patient_id: Uuid,
    eyes: PerEye<EyeWorkflow>,
}

impl TargetDraft {
    pub fn from_results(patient_id: Uuid, od: TrbsResult, os: TrbsResult) -> Self {
        Self {
            patient_id,
            eyes: PerEye::new(
                EyeWorkflow {
                    calc: od,
                    decision: EyeDecision::Calculated,
                },
                EyeWorkflow {
                    calc: os,
                    decision: EyeDecision::Calculated,
                },
            ),
        }
    }

    pub fn patient_id(&self) -> Uuid {
        self.patient_id
    }

    pub fn calculation(&self, eye: Eye) -> &TrbsResult {
        &self.eyes.get(eye).calc
    }

    pub fn decision(&self, eye: Eye) -> &EyeDecision {
        &self.eyes.get(eye).decision
    }

    /// The target that would be persisted for this eye right now.
    pub fn final_target_mmhg(&self, eye: Eye) -> f64 {
        let eye_state = self.eyes.get(eye);
        match &eye_state.decision {
            EyeDecision::Calculated => eye_state.calc.calculated_target_mmhg,
            EyeDecision::Overridden {
                final_target_mmhg, ..
            } => *final_target_mmhg,
        }
    }

    /// Replace both calculations with fresh results, discarding any
    /// overrides from the previous cycle.
    pub fn recalculate(&mut self, od: TrbsResult, os: TrbsResult) {
        *self = Self::from_results(self.patient_id, od, os);
    }

    /// Enter the overridden state with the clinician's edited target,
    /// keeping any reason already written this cycle.
    pub fn override_target(&mut self, eye: Eye, final_target_mmhg: f64) {
        let eye_state = self.eyes.get_mut(eye);
        let reason = match &eye_state.decision {
            EyeDecision::Overridden { reason, .. } => reason.clone(),
            EyeDecision::Calculated => String::new(),
        };
        eye_state.decision = EyeDecision::Overridden {
            final_target_mmhg,
            reason,
        };
    }

    /// Record the justification for an override. Ignored while the eye is
    /// in the calculated state.
    pub fn set_override_reason(&mut self, eye: Eye, reason: impl Into<String>) {
        if let EyeDecision::Overridden {
            reason: existing, ..
        } = &mut self.eyes.get_mut(eye).decision
        {
            *existing = reason.into();
        }
    }

    /// Explicit return to the calculated target, clearing the reason.
    pub fn reset_to_calculated(&mut self, eye: Eye) {
        self.eyes.get_mut(eye).decision = EyeDecision::Calculated;
    }

    /// The save gate: every overridden eye needs a non-blank reason.
    pub fn validate(&self) -> Result<(), TargetError> {
        for eye in Eye::BOTH {
            if let EyeDecision::Overridden { reason, .. } = &self.eyes.get(eye).decision
                && reason.trim().is_empty()
            {
                return Err(TargetError::OverrideWithoutReason { eye });
            }
        }
        Ok(())
    }

    /// Validate and snapshot both eyes into the persistable record.
    pub fn finalize(&self, set_by: impl Into<String>) -> Result<TargetRecord, TargetError> {
        self.validate()?;

        let eye_target = |eye: Eye| {
            let eye_state = self.eyes.get(eye);
            let (overridden, override_reason) = match &eye_state.decision {
                EyeDecision::Calculated => (false, None),
                EyeDecision::Overridden { reason, .. } => (true, Some(reason.clone())),
            };
            EyeTarget {
                calculated_target_mmhg: eye_state.calc.calculated_target_mmhg,
                final_target_mmhg: self.final_target_mmhg(eye),
                trbs_score: eye_state.calc.score,
                risk_tier: eye_state.calc.risk_tier,
                baseline: eye_state.calc.baseline,
                overridden,
                override_reason,
            }
        };

        Ok(TargetRecord {
            id: Uuid::new_v4(),
            patient_id: self.patient_id,
            eyes: PerEye::from_fn(eye_target),
            set_by: set_by.into(),
            set_at: jiff::Timestamp::now(),
        })
    }
}
