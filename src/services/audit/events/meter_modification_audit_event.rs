use crate::services::meter_api::status::Status;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeterModificationAuditEvent {
    /// `None` for organization-wide changes such as free-standing annotations
    pub meter: Option<String>,
    pub modification: MeterModification,
    pub modification_result: ModificationResult,
}

impl MeterModificationAuditEvent {
    pub fn new(meter: Option<String>, modification: MeterModification, modification_result: ModificationResult) -> Self {
        Self {
            meter,
            modification,
            modification_result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MeterModification {
    Create,
    Tag(String),
    Annotate(String),
}

#[derive(Debug, Serialize)]
pub enum ModificationResult {
    Success,
    Failure(String),
}

impl<T> From<&Result<T, Status>> for ModificationResult {
    fn from(result: &Result<T, Status>) -> Self {
        match result {
            Ok(_) => ModificationResult::Success,
            Err(e) => ModificationResult::Failure(e.to_string()),
        }
    }
}
