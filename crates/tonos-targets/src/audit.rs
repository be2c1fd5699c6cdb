use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use tonos_core::models::{PerEye, TargetRecord};

/// The audit trail entry for an approved target save.
///
/// Emitted via `tracing` so the hosting application's subscriber decides
/// where audit lines land; the store records one per save/replace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub action: &'static str,
    pub record_id: Uuid,
    pub patient_id: Uuid,
    pub clinician: String,
    /// How many earlier records this save pushed into history.
    pub superseded: usize,
    pub overridden: PerEye<bool>,
}

impl AuditEvent {
    pub fn target_saved(record: &TargetRecord, superseded: usize) -> Self {
        Self {
            action: "target.save",
            record_id: record.id,
            patient_id: record.patient_id,
            clinician: record.set_by.clone(),
            superseded,
            overridden: PerEye::new(record.eyes.od.overridden, record.eyes.os.overridden),
        }
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = self.action,
            audit.record_id = %self.record_id,
            audit.patient_id = %self.patient_id,
            audit.clinician = %self.clinician,
            audit.superseded = self.superseded,
            audit.overridden_od = self.overridden.od,
            audit.overridden_os = self.overridden.os,
            "audit event"
        );
    }
}
