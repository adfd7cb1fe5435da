
use crate::services::meter_api::status::Status;
use log::error;
use serde::Deserialize;

/// What the caller does with a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Return the error to the caller
    Propagate,
    /// Log the error and carry on with the run
    LogAndContinue,
}

impl FailurePolicy {
    pub fn apply<T>(&self, operation: &str, result: Result<T, Status>) -> Result<Option<T>, Status> {
        match (result, self) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(e), FailurePolicy::Propagate) => Err(e),
            (Err(e), FailurePolicy::LogAndContinue) => {
                error!(
                    operation = operation,
                    kind:? = e.kind();
                    "Could not {}, failed with {}", operation, e);
                Ok(None)
            }
        }
    }
}

/// How a delete treats a meter the service does not know about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMeterPolicy {
    #[default]
    Fail,
    Ignore,
}

impl MissingMeterPolicy {
    /// Turns a not-found result into success under [`MissingMeterPolicy::Ignore`].
    /// Returns whether the meter was present.
    pub fn apply(&self, result: Result<(), Status>) -> Result<bool, Status> {
        match (result, self) {
            (Ok(()), _) => Ok(true),
            (Err(e), MissingMeterPolicy::Ignore) if e.is_not_found() => Ok(false),
            (Err(e), _) => Err(e),
        }
    }
}
