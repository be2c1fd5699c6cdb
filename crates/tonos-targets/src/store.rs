//! In-memory target-record store.
//!
//! One record is current per patient; saving replaces it and pushes the
//! previous one into that patient's history. The async surface matches
//! the persistence boundary the hosting application plugs a real
//! datastore into.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use tonos_core::models::TargetRecord;

use crate::audit::AuditEvent;

#[derive(Debug, Default)]
pub struct TargetStore {
    /// Per patient, oldest first; the last entry is current.
    records: RwLock<HashMap<Uuid, Vec<TargetRecord>>>,
}

impl TargetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist an approved record, superseding the patient's previous
    /// current target.
    pub async fn save(&self, record: TargetRecord) {
        let mut records = self.records.write().await;
        let history = records.entry(record.patient_id).or_default();

        AuditEvent::target_saved(&record, history.len()).emit();

        history.push(record);
    }

    /// The patient's current target, if any has been approved.
    pub async fn current(&self, patient_id: Uuid) -> Option<TargetRecord> {
        let records = self.records.read().await;
        records.get(&patient_id).and_then(|h| h.last()).cloned()
    }

    /// All of the patient's target records, newest first.
    pub async fn history(&self, patient_id: Uuid) -> Vec<TargetRecord> {
        let records = self.records.read().await;
        records
            .get(&patient_id)
            .map(|h| h.iter().rev().cloned().collect())
            .unwrap_or_default()
    }
}
