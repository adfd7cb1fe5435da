pub mod events;
pub mod log_audit_service;

use crate::services::audit::events::meter_delete_audit_event::MeterDeleteAuditEvent;
use crate::services::audit::events::meter_modification_audit_event::MeterModificationAuditEvent;
use anyhow::Result;

/// Records changes made to remote meters
pub trait AuditService: Send + Sync {
    fn record_meter_modification(&self, event: MeterModificationAuditEvent) -> Result<()>;
    fn record_meter_deletion(&self, event: MeterDeleteAuditEvent) -> Result<()>;
}
