use crate::services::lifecycle::failure_policy::{FailurePolicy, MissingMeterPolicy};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct ProvisioningSettings {
    #[serde(default = "best_effort")]
    pub tag_failure_policy: FailurePolicy,

    #[serde(default = "best_effort")]
    pub annotation_failure_policy: FailurePolicy,

    #[serde(default)]
    pub missing_meter_on_delete: MissingMeterPolicy,

    /// Where the meter id is persisted between runs. Nothing is persisted when absent.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

fn best_effort() -> FailurePolicy {
    FailurePolicy::LogAndContinue
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        ProvisioningSettings {
            tag_failure_policy: best_effort(),
            annotation_failure_policy: best_effort(),
            missing_meter_on_delete: MissingMeterPolicy::default(),
            state_file: None,
        }
    }
}
