pub mod meter_delete_audit_event;
pub mod meter_modification_audit_event;
