use uuid::Uuid;

use tonos_core::models::{BaselineIop, CupDiscRatio, Eye, RiskFactorRecord, TargetRecord};
use tonos_targets::{AuditEvent, TargetDraft, TargetStatus, TargetStore, classify_iop};
use tonos_trbs::{calculated_target, evaluate};

fn approved_record(patient_id: Uuid, record: &RiskFactorRecord) -> TargetRecord {
    let od = evaluate(record, Eye::Od, Some(BaselineIop::measured(21.0))).unwrap();
    let os = evaluate(record, Eye::Os, Some(BaselineIop::measured(24.0))).unwrap();
    TargetDraft::from_results(patient_id, od, os)
        .finalize("Dr. Rao")
        .unwrap()
}

#[tokio::test]
async fn second_save_fully_replaces_the_first() {
    let store = TargetStore::new();
    let patient_id = Uuid::new_v4();

    let quiet = RiskFactorRecord::default();
    let first = approved_record(patient_id, &quiet);
    store.save(first.clone()).await;

    let mut worse = RiskFactorRecord::default();
    worse.eyes.od.cdr = CupDiscRatio::PointNineOrMore;
    let second = approved_record(patient_id, &worse);
    store.save(second.clone()).await;

    let current = store.current(patient_id).await.unwrap();
    assert_eq!(current.id, second.id);

    let history = store.history(patient_id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
}

#[tokio::test]
async fn unknown_patient_has_no_current_target() {
    let store = TargetStore::new();
    assert!(store.current(Uuid::new_v4()).await.is_none());
    assert!(store.history(Uuid::new_v4()).await.is_empty());
}

#[tokio::test]
async fn patients_do_not_see_each_others_targets() {
    let store = TargetStore::new();
    let quiet = RiskFactorRecord::default();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    store.save(approved_record(a, &quiet)).await;

    assert!(store.current(a).await.is_some());
    assert!(store.current(b).await.is_none());
}

#[tokio::test]
async fn stored_target_recomputes_without_drift() {
    let store = TargetStore::new();
    let patient_id = Uuid::new_v4();
    let mut record = RiskFactorRecord::default();
    record.eyes.od.cdr = CupDiscRatio::PointEight;
    store.save(approved_record(patient_id, &record)).await;

    let stored = store.current(patient_id).await.unwrap();
    for eye in Eye::BOTH {
        let eye_target = stored.eyes.get(eye);
        let recomputed = calculated_target(eye_target.baseline.value_mmhg, eye_target.risk_tier);
        assert_eq!(recomputed, eye_target.calculated_target_mmhg);
    }
}

#[test]
fn audit_event_snapshots_the_saved_record() {
    let patient_id = Uuid::new_v4();
    let record = RiskFactorRecord::default();

    let od = evaluate(&record, Eye::Od, Some(BaselineIop::measured(21.0))).unwrap();
    let os = evaluate(&record, Eye::Os, Some(BaselineIop::measured(24.0))).unwrap();
    let mut draft = TargetDraft::from_results(patient_id, od, os);
    draft.override_target(Eye::Os, 14.0);
    draft.set_override_reason(Eye::Os, "progressive field loss");
    let saved = draft.finalize("Dr. Rao").unwrap();

    let event = AuditEvent::target_saved(&saved, 1);
    assert_eq!(event.action, "target.save");
    assert_eq!(event.record_id, saved.id);
    assert_eq!(event.patient_id, patient_id);
    assert_eq!(event.clinician, "Dr. Rao");
    assert_eq!(event.superseded, 1);
    assert!(!event.overridden.od);
    assert!(event.overridden.os);
}

#[test]
fn measurements_classify_against_the_final_target() {
    assert_eq!(classify_iop(20.0, 18.0), TargetStatus::AboveTarget);
    assert_eq!(classify_iop(18.0, 18.0), TargetStatus::WithinTarget);
    assert_eq!(classify_iop(16.0, 18.0), TargetStatus::WithinTarget);
    assert_eq!(classify_iop(15.9, 18.0), TargetStatus::BelowTarget);
}
