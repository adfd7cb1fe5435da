use crate::services::audit::AuditService;
use crate::services::audit::events::meter_delete_audit_event::MeterDeleteAuditEvent;
use crate::services::audit::events::meter_modification_audit_event::{
    MeterModification, MeterModificationAuditEvent, ModificationResult,
};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingAuditService {
    modifications: Mutex<Vec<(MeterModification, bool)>>,
    modified_meters: Mutex<Vec<Option<String>>>,
    deletions: Mutex<Vec<MeterDeleteAuditEvent>>,
}

impl RecordingAuditService {
    /// Recorded modifications with whether they succeeded
    pub fn modifications(&self) -> Vec<(MeterModification, bool)> {
        self.modifications.lock().unwrap().clone()
    }

    /// Meter named by each recorded modification, `None` for organization-wide ones
    pub fn modified_meters(&self) -> Vec<Option<String>> {
        self.modified_meters.lock().unwrap().clone()
    }

    pub fn count_del(&self) -> usize {
        self.deletions.lock().unwrap().len()
    }

    pub fn last_deletion_successful(&self) -> Option<bool> {
        self.deletions.lock().unwrap().last().map(|event| event.successful)
    }
}

impl AuditService for RecordingAuditService {
    fn record_meter_modification(&self, event: MeterModificationAuditEvent) -> anyhow::Result<()> {
        let successful = matches!(event.modification_result, ModificationResult::Success);
        self.modified_meters.lock().unwrap().push(event.meter);
        self.modifications
            .lock()
            .unwrap()
            .push((event.modification, successful));
        Ok(())
    }

    fn record_meter_deletion(&self, event: MeterDeleteAuditEvent) -> anyhow::Result<()> {
        self.deletions.lock().unwrap().push(event);
        Ok(())
    }
}
