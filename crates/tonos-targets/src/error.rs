use thiserror::Error;
use tonos_core::models::Eye;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Save was attempted while an eye's target is overridden without a
    /// written justification. Blocks only the save; the clinician
    /// corrects and retries.
    #[error("override for {eye} requires a reason before saving")]
    OverrideWithoutReason { eye: Eye },
}
