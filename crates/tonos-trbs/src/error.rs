use thiserror::Error;
use tonos_core::models::Eye;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrbsError {
    /// No baseline was available even after default substitution. The
    /// default-baseline policy should make this unreachable in normal
    /// operation, but the scorer guards it rather than inventing a
    /// pressure.
    #[error("no baseline IOP available for {eye}")]
    MissingBaseline { eye: Eye },
}
