use tonos_core::models::{
    AgeRange, Cct, CentralField, CupDiscRatio, Eye, FamilyHistory, Finding, MeanDeviation, Myopia,
    Notching, OcularModifier, PerEye, SystemicFactor,
};
use tonos_intake::{
    ClinicalInputs, FundusEyeInput, HistoryToggles, InvestigationInput, RefractionEyeInput,
    VisualFieldEyeInput, aggregate,
};

#[test]
fn empty_inputs_yield_the_safe_default_record() {
    let record = aggregate(&ClinicalInputs::default());
    assert_eq!(record.shared.age_range, AgeRange::FiftyTo70);
    assert_eq!(record.eyes.od.mean_deviation, MeanDeviation::HfaNotDone);
    assert_eq!(record.eyes.os.cdr, CupDiscRatio::HalfOrLess);
    assert!(record.shared.systemic_factors.is_empty());
}

#[test]
fn age_brackets() {
    for (age, expected) in [
        (Some(45), AgeRange::Under50),
        (Some(50), AgeRange::FiftyTo70),
        (Some(70), AgeRange::FiftyTo70),
        (Some(71), AgeRange::Over70),
        (None, AgeRange::FiftyTo70),
    ] {
        let inputs = ClinicalInputs {
            age_years: age,
            ..Default::default()
        };
        assert_eq!(aggregate(&inputs).shared.age_range, expected, "age={age:?}");
    }
}

#[test]
fn mean_deviation_buckets_onto_the_scoring_scale() {
    let vf = |md: f64| {
        Some(VisualFieldEyeInput {
            md_db: Some(md),
            reliable: true,
            central_10_degrees: false,
        })
    };
    for (md, expected) in [
        (-2.0, MeanDeviation::GreaterThanMinus6),
        (-6.0, MeanDeviation::GreaterThanMinus6),
        (-6.1, MeanDeviation::Minus6ToMinus12),
        (-15.0, MeanDeviation::Minus12ToMinus20),
        (-22.5, MeanDeviation::LessThanMinus20),
    ] {
        let inputs = ClinicalInputs {
            visual_field: PerEye::new(vf(md), None),
            ..Default::default()
        };
        assert_eq!(
            aggregate(&inputs).eyes.od.mean_deviation,
            expected,
            "md={md}"
        );
    }
}

#[test]
fn unreliable_field_overrides_the_numeric_value() {
    let inputs = ClinicalInputs {
        visual_field: PerEye::new(
            Some(VisualFieldEyeInput {
                md_db: Some(-2.0),
                reliable: false,
                central_10_degrees: true,
            }),
            None,
        ),
        ..Default::default()
    };
    let record = aggregate(&inputs);
    assert_eq!(record.eyes.od.mean_deviation, MeanDeviation::HfaNotPossible);
    assert_eq!(record.eyes.od.central_field, CentralField::Yes);
    // The untested eye stays at HFA-not-done.
    assert_eq!(record.eyes.os.mean_deviation, MeanDeviation::HfaNotDone);
}

fn fundus_od(cdr: &str, notch: &str) -> Option<PerEye<FundusEyeInput>> {
    Some(PerEye::new(
        FundusEyeInput {
            cdr: Some(cdr.to_string()),
            notch: Some(notch.to_string()),
            ..Default::default()
        },
        FundusEyeInput::default(),
    ))
}

#[test]
fn cdr_text_floors_to_the_lower_bucket() {
    for (text, expected) in [
        ("0.5", CupDiscRatio::HalfOrLess),
        ("0.55", CupDiscRatio::HalfOrLess),
        ("0.6", CupDiscRatio::PointSix),
        ("CDR 0.85", CupDiscRatio::PointEight),
        ("0.9", CupDiscRatio::PointNineOrMore),
        ("pink disc", CupDiscRatio::HalfOrLess),
    ] {
        let inputs = ClinicalInputs {
            fundus: fundus_od(text, ""),
            ..Default::default()
        };
        assert_eq!(aggregate(&inputs).eyes.od.cdr, expected, "text={text:?}");
    }
}

#[test]
fn any_notch_wording_collapses_to_bipolar() {
    for (text, expected) in [
        ("no notch", Notching::Absent),
        ("", Notching::Absent),
        ("inferior notch", Notching::Bipolar),
        ("unipolar superior", Notching::Bipolar),
        ("bipolar notching", Notching::Bipolar),
    ] {
        let inputs = ClinicalInputs {
            fundus: fundus_od("0.5", text),
            ..Default::default()
        };
        assert_eq!(
            aggregate(&inputs).eyes.od.notching,
            expected,
            "text={text:?}"
        );
    }
}

#[test]
fn hemorrhage_and_rnfl_come_from_fundus_text() {
    let inputs = ClinicalInputs {
        fundus: Some(PerEye::new(
            FundusEyeInput {
                background_retina: Some("flame-shaped haemorrhage at disc margin".to_string()),
                rnfl: Some("Present".to_string()),
                ..Default::default()
            },
            FundusEyeInput {
                background_retina: Some("normal".to_string()),
                rnfl: Some("absent".to_string()),
                ..Default::default()
            },
        )),
        ..Default::default()
    };
    let record = aggregate(&inputs);
    assert_eq!(record.eyes.od.disc_hemorrhage, Finding::Present);
    assert_eq!(record.eyes.od.rnfl_defect, Finding::Present);
    assert_eq!(record.eyes.os.disc_hemorrhage, Finding::Absent);
    assert_eq!(record.eyes.os.rnfl_defect, Finding::Absent);
}

#[test]
fn myopia_derives_from_sphere_power() {
    for (sphere, expected) in [
        ("+1.00 DS", Myopia::None),
        ("-0.75", Myopia::None),
        ("-1.00", Myopia::None),
        ("-1.25 DS", Myopia::LowMyopia),
        ("-3.00", Myopia::LowMyopia),
        ("-3.50 DS", Myopia::ModHighMyopia),
        ("plano", Myopia::None),
    ] {
        let inputs = ClinicalInputs {
            refraction: PerEye::new(
                Some(RefractionEyeInput {
                    sphere: Some(sphere.to_string()),
                }),
                None,
            ),
            ..Default::default()
        };
        assert_eq!(
            aggregate(&inputs).eyes.od.myopia,
            expected,
            "sphere={sphere:?}"
        );
    }
}

#[test]
fn thin_cornea_from_pachymetry() {
    let inputs = ClinicalInputs {
        investigations: Some(InvestigationInput {
            pachymetry: PerEye::new(Some("495 µm".to_string()), Some("520".to_string())),
            ..Default::default()
        }),
        ..Default::default()
    };
    let record = aggregate(&inputs);
    assert_eq!(record.eyes.od.cct, Cct::Thin);
    assert_eq!(record.eyes.os.cct, Cct::Normal);
}

#[test]
fn history_toggles_map_to_systemic_factors() {
    let inputs = ClinicalInputs {
        history: Some(HistoryToggles {
            family_glaucoma: true,
            diabetes: true,
            migraine: true,
            raynauds: true,
            sleep_apnea: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    let record = aggregate(&inputs);
    assert_eq!(record.shared.family_history, FamilyHistory::Present);
    for factor in [
        SystemicFactor::DiabetesMellitus,
        SystemicFactor::MigraineVasospasm,
        SystemicFactor::Raynauds,
        SystemicFactor::SleepApnea,
    ] {
        assert!(record.shared.systemic_factors.contains(&factor));
    }
    assert!(
        !record
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );
}

fn bp_inputs(bp: &str, iop_od: f64, iop_os: f64) -> ClinicalInputs {
    ClinicalInputs {
        investigations: Some(InvestigationInput {
            blood_pressure: Some(bp.to_string()),
            current_iop_mmhg: PerEye::new(Some(iop_od), Some(iop_os)),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn dopp_of_52_is_not_low() {
    let record = aggregate(&bp_inputs("120/60", 8.0, 8.0));
    assert!(
        !record
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );
}

#[test]
fn dopp_of_45_flags_low_perfusion() {
    let record = aggregate(&bp_inputs("110/55", 10.0, 8.0));
    assert!(
        record
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );
}

#[test]
fn recovered_dopp_removes_the_stale_flag() {
    // Aggregation reflects current inputs, never accumulated history.
    let low = aggregate(&bp_inputs("110/55", 10.0, 10.0));
    assert!(
        low.shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );

    let recovered = aggregate(&bp_inputs("130/70", 10.0, 10.0));
    assert!(
        !recovered
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );
}

#[test]
fn hypertension_proxy_applies_only_without_a_dopp() {
    let toggles = HistoryToggles {
        hypertension: true,
        ..Default::default()
    };

    // No BP/IOP pair: the crude proxy kicks in.
    let proxied = aggregate(&ClinicalInputs {
        history: Some(toggles),
        ..Default::default()
    });
    assert!(
        proxied
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );

    // A measurable, normal DOPP wins over the toggle.
    let mut measured = bp_inputs("130/70", 10.0, 10.0);
    measured.history = Some(toggles);
    assert!(
        !aggregate(&measured)
            .shared
            .systemic_factors
            .contains(&SystemicFactor::LowOcularPerfusion)
    );
}

#[test]
fn diagnosis_lines_route_modifiers_by_eye() {
    let inputs = ClinicalInputs {
        diagnoses: vec![
            "RE PXF glaucoma".to_string(),
            "pigment dispersion syndrome".to_string(),
        ],
        ..Default::default()
    };
    let record = aggregate(&inputs);
    assert!(
        record
            .eyes
            .od
            .ocular_modifiers
            .contains(&OcularModifier::Pseudoexfoliation)
    );
    assert!(
        !record
            .eyes
            .os
            .ocular_modifiers
            .contains(&OcularModifier::Pseudoexfoliation)
    );
    // Untagged lines apply to both eyes.
    for eye in Eye::BOTH {
        assert!(
            record
                .eyes
                .get(eye)
                .ocular_modifiers
                .contains(&OcularModifier::PigmentDispersion)
        );
    }
}

#[test]
fn gonioscopy_text_contributes_modifiers() {
    let inputs = ClinicalInputs {
        investigations: Some(InvestigationInput {
            gonioscopy: PerEye::new(Some("angle recession temporal".to_string()), None),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(
        aggregate(&inputs)
            .eyes
            .od
            .ocular_modifiers
            .contains(&OcularModifier::AngleRecession)
    );
}

#[test]
fn aggregation_is_idempotent_to_the_byte() {
    let mut inputs = bp_inputs("110/55", 10.0, 8.0);
    inputs.history = Some(HistoryToggles {
        family_glaucoma: true,
        migraine: true,
        ..Default::default()
    });
    inputs.fundus = fundus_od("0.7", "inferior notch");
    inputs.diagnoses = vec!["steroid responder".to_string()];

    let first = serde_json::to_string(&aggregate(&inputs)).unwrap();
    let second = serde_json::to_string(&aggregate(&inputs)).unwrap();
    assert_eq!(first, second);
}
