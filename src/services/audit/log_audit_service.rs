
use crate::services::audit::AuditService;
use crate::services::audit::events::meter_delete_audit_event::MeterDeleteAuditEvent;
use crate::services::audit::events::meter_modification_audit_event::{
    MeterModificationAuditEvent, ModificationResult,
};
use anyhow::Result;

#[derive(Default)]
pub struct LogAuditService;

impl LogAuditService {
    pub fn new() -> Self {
        Self {}
    }
}

impl AuditService for LogAuditService {
    fn record_meter_modification(&self, event: MeterModificationAuditEvent) -> Result<()> {
        if let ModificationResult::Failure(reason) = &event.modification_result {
            log::info!(
            // Indicates the audit events for easier filtering in log aggregation systems
            log_type = "audit",

            // The event decomposition for structured logging
            meter = event.meter.as_deref().unwrap_or("-"),
            modification:serde = event.modification,
            failure = reason.as_str();

            // The log message
            "Meter modification failed: {:?}/{:?}", event.meter, event.modification);
        } else {
            log::info!(
            // Indicates the audit events for easier filtering in log aggregation systems
            log_type = "audit",

            // The event decomposition for structured logging
            meter = event.meter.as_deref().unwrap_or("-"),
            modification:serde = event.modification,
            successful = true;

            // The log message
            "Meter modified: {:?}/{:?}", event.meter, event.modification);
        }

        Ok(())
    }

    fn record_meter_deletion(&self, event: MeterDeleteAuditEvent) -> Result<()> {
        log::info!(
            // Indicates the audit events for easier filtering in log aggregation systems
            log_type = "audit",

            // The event decomposition for structured logging
            meter = event.meter.as_str(),
            meter_id:? = event.meter_id,
            successful = event.successful;

            // The log message
            "Meter deleted: {:?}/{:?}", event.meter, event.meter_id);

        Ok(())
    }
}
