//! Fixed point tables for the seven TRBS domains.
//!
//! These values are the clinically validated scoring contract. Note the
//! inverted age scale: earlier onset means more lifetime exposure, so
//! younger patients score higher.

use tonos_core::models::{
    AgeRange, Cct, CentralField, CupDiscRatio, FamilyHistory, Finding, MeanDeviation, Myopia,
    Notching,
};

// Domain A: demographics.
pub fn age_points(age: AgeRange) -> u8 {
    match age {
        AgeRange::Under50 => 3,
        AgeRange::FiftyTo70 => 2,
        AgeRange::Over70 => 1,
    }
}

pub fn family_history_points(history: FamilyHistory) -> u8 {
    match history {
        FamilyHistory::Absent => 0,
        FamilyHistory::Present => 1,
    }
}

/// Domain B: medication burden as a proxy for pre-treatment pressure.
/// This is a points scale, distinct from the mmHg baseline adjustment in
/// [`crate::baseline`].
pub fn medication_points(num_agm: u8) -> u8 {
    match num_agm {
        0 => 0,
        1 => 2,
        2 => 3,
        _ => 4,
    }
}

// Domain C: structural changes.
pub fn cdr_points(cdr: CupDiscRatio) -> u8 {
    match cdr {
        CupDiscRatio::HalfOrLess => 0,
        CupDiscRatio::PointSix => 1,
        CupDiscRatio::PointSeven => 2,
        CupDiscRatio::PointEight => 3,
        CupDiscRatio::PointNineOrMore => 4,
    }
}

pub fn notching_points(notching: Notching) -> u8 {
    match notching {
        Notching::Absent => 0,
        Notching::Unipolar => 2,
        Notching::Bipolar => 3,
    }
}

pub fn finding_points(finding: Finding) -> u8 {
    match finding {
        Finding::Absent => 0,
        Finding::Present => 1,
    }
}

// Domain D: functional (visual field) changes.
pub fn mean_deviation_points(md: MeanDeviation) -> u8 {
    match md {
        MeanDeviation::HfaNotDone => 0,
        MeanDeviation::GreaterThanMinus6 => 1,
        MeanDeviation::Minus6ToMinus12 => 2,
        MeanDeviation::Minus12ToMinus20 => 3,
        MeanDeviation::LessThanMinus20 => 4,
        MeanDeviation::HfaNotPossible => 4,
    }
}

pub fn central_field_points(central: CentralField) -> u8 {
    match central {
        CentralField::No => 0,
        CentralField::Yes => 2,
    }
}

// Domain F: per-eye ocular modifiers.
pub fn cct_points(cct: Cct) -> u8 {
    match cct {
        Cct::Normal => 0,
        Cct::Thin => 1,
    }
}

pub fn myopia_points(myopia: Myopia) -> u8 {
    match myopia {
        Myopia::None => 0,
        Myopia::LowMyopia => 1,
        Myopia::ModHighMyopia => 2,
    }
}
