//! Live-measurement classification against the approved target, used by
//! the IOP-control trend banners.

use serde::{Deserialize, Serialize};

/// A measurement this far below target still counts as within it.
pub const WITHIN_TOLERANCE_MMHG: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStatus {
    AboveTarget,
    WithinTarget,
    BelowTarget,
}

/// Classify a live IOP measurement against the approved final target:
/// above it at all is `AboveTarget`, at or up to 2 mmHg below is
/// `WithinTarget`, lower is `BelowTarget`.
pub fn classify_iop(measured_mmhg: f64, final_target_mmhg: f64) -> TargetStatus {
    if measured_mmhg > final_target_mmhg {
        TargetStatus::AboveTarget
    } else if measured_mmhg >= final_target_mmhg - WITHIN_TOLERANCE_MMHG {
        TargetStatus::WithinTarget
    } else {
        TargetStatus::BelowTarget
    }
}
