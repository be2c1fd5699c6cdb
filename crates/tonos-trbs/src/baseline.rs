//! Untreated-baseline derivation.
//!
//! A patient already on pressure-lowering drops has no observable
//! untreated IOP; the step function below estimates it from the current
//! treated pressure and the number of active anti-glaucoma medications.

/// Estimated mmHg lowering attributable to the active medication count.
pub fn agm_adjustment_mmhg(num_agm: u8) -> f64 {
    match num_agm {
        0 => 0.0,
        1 => 5.0,
        2 => 8.0,
        _ => 10.0,
    }
}

/// Derive an untreated baseline from the current treated IOP.
///
/// This is a derived value: callers recompute it whenever either input
/// changes, and it is never independently editable. Absent current IOP
/// yields `None` rather than a guess.
pub fn untreated_baseline(current_iop_mmhg: Option<f64>, num_agm: u8) -> Option<f64> {
    current_iop_mmhg.map(|iop| iop + agm_adjustment_mmhg(num_agm))
}
