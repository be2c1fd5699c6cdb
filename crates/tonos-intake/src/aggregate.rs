//! The aggregation pass: one snapshot of clinical inputs in, one
//! canonical risk-factor record out.

use std::collections::BTreeSet;

use tracing::debug;

use tonos_core::models::{
    AgeRange, CentralField, Eye, EyeRiskFactors, FamilyHistory, MeanDeviation, PerEye,
    RiskFactorRecord, SharedRiskFactors, SystemicFactor,
};

use crate::inputs::ClinicalInputs;
use crate::parse;

/// A diastolic ocular perfusion pressure below this is a systemic risk
/// factor.
pub const LOW_PERFUSION_DOPP_MMHG: f64 = 50.0;

/// Normalize a snapshot of clinical inputs into the canonical record.
///
/// Pure and idempotent: the record is rebuilt from scratch on every call,
/// so derived flags reflect the current inputs only. A recomputed DOPP
/// that is no longer low drops the perfusion factor instead of leaving it
/// stale.
pub fn aggregate(inputs: &ClinicalInputs) -> RiskFactorRecord {
    RiskFactorRecord {
        shared: shared_factors(inputs),
        eyes: PerEye::from_fn(|eye| eye_factors(inputs, eye)),
    }
}

fn age_bracket(age_years: Option<u16>) -> AgeRange {
    match age_years {
        Some(age) if age < 50 => AgeRange::Under50,
        Some(age) if age > 70 => AgeRange::Over70,
        _ => AgeRange::FiftyTo70,
    }
}

fn shared_factors(inputs: &ClinicalInputs) -> SharedRiskFactors {
    let toggles = inputs.history.unwrap_or_default();

    let family_history = if toggles.family_glaucoma {
        FamilyHistory::Present
    } else {
        FamilyHistory::Absent
    };

    let mut systemic = BTreeSet::new();
    if toggles.diabetes {
        systemic.insert(SystemicFactor::DiabetesMellitus);
    }
    if toggles.migraine {
        systemic.insert(SystemicFactor::MigraineVasospasm);
    }
    if toggles.raynauds {
        systemic.insert(SystemicFactor::Raynauds);
    }
    if toggles.sleep_apnea {
        systemic.insert(SystemicFactor::SleepApnea);
    }

    match lowest_dopp(inputs) {
        Some(dopp) if dopp < LOW_PERFUSION_DOPP_MMHG => {
            debug!(dopp, "low ocular perfusion pressure");
            systemic.insert(SystemicFactor::LowOcularPerfusion);
        }
        Some(_) => {
            // DOPP is measurable and normal; the hypertension proxy does
            // not apply.
        }
        None => {
            // No BP/IOP pair to derive DOPP from; hypertension or cardiac
            // disease stands in as a crude perfusion proxy.
            if toggles.hypertension || toggles.cardiac {
                systemic.insert(SystemicFactor::LowOcularPerfusion);
            }
        }
    }

    SharedRiskFactors {
        age_range: age_bracket(inputs.age_years),
        family_history,
        num_agm: inputs.num_agm,
        patient_factors: inputs.patient_factors.clone(),
        systemic_factors: systemic,
    }
}

/// The worst (lowest) per-eye DOPP derivable from the current inputs.
/// DOPP = diastolic BP − current IOP, per eye.
fn lowest_dopp(inputs: &ClinicalInputs) -> Option<f64> {
    let investigations = inputs.investigations.as_ref()?;
    let bp_text = investigations.blood_pressure.as_deref()?;
    let (_, diastolic) = parse::blood_pressure(bp_text)?;

    Eye::BOTH
        .iter()
        .filter_map(|eye| {
            let iop = *investigations.current_iop_mmhg.get(*eye);
            iop.map(|iop| diastolic - iop)
        })
        .min_by(f64::total_cmp)
}

fn eye_factors(inputs: &ClinicalInputs, eye: Eye) -> EyeRiskFactors {
    let mut factors = EyeRiskFactors::default();

    if let Some(fundus) = inputs.fundus.as_ref().map(|f| f.get(eye)) {
        if let Some(cdr) = fundus.cdr.as_deref() {
            factors.cdr = parse::cdr_bucket(cdr);
        }
        if let Some(notch) = fundus.notch.as_deref() {
            factors.notching = parse::notch_category(notch);
        }
        if let Some(retina) = fundus.background_retina.as_deref() {
            factors.disc_hemorrhage = parse::hemorrhage_finding(retina);
        }
        if let Some(rnfl) = fundus.rnfl.as_deref() {
            factors.rnfl_defect = parse::rnfl_finding(rnfl);
        }
    }

    match inputs.visual_field.get(eye) {
        None => {
            factors.mean_deviation = MeanDeviation::HfaNotDone;
        }
        Some(vf) if !vf.reliable => {
            // An unreliable test is bucketed as not-possible regardless of
            // its numeric MD.
            factors.mean_deviation = MeanDeviation::HfaNotPossible;
            factors.central_field = central(vf.central_10_degrees);
        }
        Some(vf) => {
            factors.mean_deviation = match vf.md_db {
                Some(md) => parse::md_bucket(md),
                None => MeanDeviation::HfaNotDone,
            };
            factors.central_field = central(vf.central_10_degrees);
        }
    }

    if let Some(sphere) = inputs
        .refraction
        .get(eye)
        .as_ref()
        .and_then(|r| r.sphere.as_deref())
    {
        factors.myopia = parse::myopia_from_sphere(sphere);
    }

    if let Some(investigations) = inputs.investigations.as_ref() {
        if let Some(pachymetry) = investigations.pachymetry.get(eye).as_deref() {
            factors.cct = parse::cct_from_pachymetry(pachymetry);
        }
        if let Some(gonioscopy) = investigations.gonioscopy.get(eye).as_deref() {
            factors
                .ocular_modifiers
                .extend(parse::ocular_modifiers_from_text(gonioscopy));
        }
    }

    for line in &inputs.diagnoses {
        if diagnosis_applies(line, eye) {
            let modifiers = parse::ocular_modifiers_from_text(line);
            if !modifiers.is_empty() {
                debug!(%eye, line, "ocular modifiers from diagnosis");
                factors.ocular_modifiers.extend(modifiers);
            }
        }
    }

    factors
}

fn central(involved: bool) -> CentralField {
    if involved {
        CentralField::Yes
    } else {
        CentralField::No
    }
}

/// A diagnosis line tagged for one eye ("RE PXF glaucoma") applies only
/// to that eye; untagged lines apply to both.
fn diagnosis_applies(line: &str, eye: Eye) -> bool {
    let words: Vec<String> = line
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(str::to_ascii_lowercase)
        .collect();
    let has = |tokens: &[&str]| words.iter().any(|w| tokens.contains(&w.as_str()));

    let od_tagged = has(&["od", "re", "right"]);
    let os_tagged = has(&["os", "le", "left"]);
    if !od_tagged && !os_tagged {
        return true;
    }
    match eye {
        Eye::Od => od_tagged,
        Eye::Os => os_tagged,
    }
}
