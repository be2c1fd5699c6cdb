//! Free-text normalizers for the clinical-entry fields.
//!
//! All of these fail open: text that cannot be read yields the zero-point
//! bucket for its field.

use std::collections::BTreeSet;

use tonos_core::models::{Cct, CupDiscRatio, Finding, MeanDeviation, Myopia, Notching, OcularModifier};

/// Pull the first numeric token out of free text, keeping a sign attached
/// to its digits ("-3.50 DS" → -3.5, "CDR 0.85" → 0.85).
pub(crate) fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        let signed_start = c == '-'
            && bytes
                .get(i + 1)
                .is_some_and(|b| (*b as char).is_ascii_digit());
        if c.is_ascii_digit() || signed_start {
            let start = i;
            let mut j = i + usize::from(signed_start);
            while j < bytes.len() && ((bytes[j] as char).is_ascii_digit() || bytes[j] == b'.') {
                j += 1;
            }
            let token = text[start..j].trim_end_matches('.');
            if let Ok(value) = token.parse::<f64>() {
                return Some(value);
            }
            i = j;
        } else {
            i += 1;
        }
    }
    None
}

/// Map a cup-disc ratio as written ("0.7", "CDR 0.85") to its bucket.
///
/// Values between defined buckets floor to the lower one (0.55 reads as
/// 0.5 or less). Unreadable text scores zero points.
pub fn cdr_bucket(text: &str) -> CupDiscRatio {
    match first_number(text) {
        Some(v) if v >= 0.9 => CupDiscRatio::PointNineOrMore,
        Some(v) if v >= 0.8 => CupDiscRatio::PointEight,
        Some(v) if v >= 0.7 => CupDiscRatio::PointSeven,
        Some(v) if v >= 0.6 => CupDiscRatio::PointSix,
        _ => CupDiscRatio::HalfOrLess,
    }
}

const NOTCH_WORDS: [&str; 7] = [
    "notch", "unipolar", "bipolar", "superior", "inferior", "temporal", "nasal",
];

/// Collapse notch wording to a bucket. Any described notch maps to the
/// higher-point `Bipolar` bucket; only explicit absence maps to `Absent`.
/// This two-way collapse of a three-way clinical distinction is
/// intentional and must be preserved.
pub fn notch_category(text: &str) -> Notching {
    let t = text.trim().to_ascii_lowercase();
    if t.is_empty() || t.contains("no notch") || t == "absent" || t == "none" {
        return Notching::Absent;
    }
    if NOTCH_WORDS.iter().any(|w| t.contains(w)) {
        Notching::Bipolar
    } else {
        Notching::Absent
    }
}

/// Scan background-retina text for disc hemorrhage wording.
pub fn hemorrhage_finding(text: &str) -> Finding {
    let t = text.to_ascii_lowercase();
    if t.contains("hemorrhage") || t.contains("haemorrhage") {
        Finding::Present
    } else {
        Finding::Absent
    }
}

/// The RNFL field is a present/absent dropdown; anything else reads as
/// absent.
pub fn rnfl_finding(text: &str) -> Finding {
    if text.trim().eq_ignore_ascii_case("present") {
        Finding::Present
    } else {
        Finding::Absent
    }
}

/// Derive myopia severity from a sphere power as written ("-3.50 DS",
/// "+1.00"). Non-numeric input means no myopia.
pub fn myopia_from_sphere(text: &str) -> Myopia {
    let Some(sph) = first_number(text) else {
        return Myopia::None;
    };
    if sph >= -1.0 {
        Myopia::None
    } else if sph >= -3.0 {
        Myopia::LowMyopia
    } else {
        Myopia::ModHighMyopia
    }
}

/// Pachymetry under 500 µm reads as a thin cornea.
pub fn cct_from_pachymetry(text: &str) -> Cct {
    match first_number(text) {
        Some(microns) if microns > 0.0 && microns < 500.0 => Cct::Thin,
        _ => Cct::Normal,
    }
}

/// Bucket a numeric mean deviation onto the scorer's scale.
pub fn md_bucket(md_db: f64) -> MeanDeviation {
    if md_db >= -6.0 {
        MeanDeviation::GreaterThanMinus6
    } else if md_db >= -12.0 {
        MeanDeviation::Minus6ToMinus12
    } else if md_db >= -20.0 {
        MeanDeviation::Minus12ToMinus20
    } else {
        MeanDeviation::LessThanMinus20
    }
}

/// Parse a blood pressure as written ("140/80", "140 / 80 mm Hg") into
/// (systolic, diastolic).
pub fn blood_pressure(text: &str) -> Option<(f64, f64)> {
    let (systolic_part, diastolic_part) = text.split_once('/')?;
    Some((first_number(systolic_part)?, first_number(diastolic_part)?))
}

/// Scan diagnosis or gonioscopy text for ocular risk modifier keywords.
pub fn ocular_modifiers_from_text(text: &str) -> BTreeSet<OcularModifier> {
    let t = text.to_ascii_lowercase();
    let mut modifiers = BTreeSet::new();
    if t.contains("pseudoexfoliation") || t.contains("pxf") {
        modifiers.insert(OcularModifier::Pseudoexfoliation);
    }
    if t.contains("pigment") {
        modifiers.insert(OcularModifier::PigmentDispersion);
    }
    if t.contains("recession") {
        modifiers.insert(OcularModifier::AngleRecession);
    }
    if t.contains("steroid") {
        modifiers.insert(OcularModifier::SteroidResponder);
    }
    modifiers
}
