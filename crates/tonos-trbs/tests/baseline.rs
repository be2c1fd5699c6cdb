use tonos_trbs::{agm_adjustment_mmhg, untreated_baseline};

#[test]
fn adjustment_steps_with_medication_count() {
    assert_eq!(agm_adjustment_mmhg(0), 0.0);
    assert_eq!(agm_adjustment_mmhg(1), 5.0);
    assert_eq!(agm_adjustment_mmhg(2), 8.0);
    assert_eq!(agm_adjustment_mmhg(3), 10.0);
    assert_eq!(agm_adjustment_mmhg(6), 10.0);
}

#[test]
fn treated_iop_on_two_drops_derives_plus_eight() {
    assert_eq!(untreated_baseline(Some(18.0), 2), Some(26.0));
}

#[test]
fn untreated_patient_needs_no_adjustment() {
    assert_eq!(untreated_baseline(Some(24.0), 0), Some(24.0));
}

#[test]
fn absent_current_iop_yields_none() {
    assert_eq!(untreated_baseline(None, 3), None);
}
