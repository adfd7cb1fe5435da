use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeterDeleteAuditEvent {
    pub meter: String,
    pub meter_id: Option<String>,
    pub successful: bool,
}

impl MeterDeleteAuditEvent {
    pub fn new(meter: String, meter_id: Option<String>, successful: bool) -> Self {
        Self {
            meter,
            meter_id,
            successful,
        }
    }
}
