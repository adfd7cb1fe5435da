use crate::services::meter_api::status::Status;

/// Outcome of applying a list of tags one request at a time
#[derive(Debug, Default)]
pub struct TaggingReport {
    pub applied: Vec<String>,
    pub failed: Vec<(String, Status)>,
}

impl TaggingReport {
    pub fn record(&mut self, tag: String, result: Result<(), Status>) {
        match result {
            Ok(()) => self.applied.push(tag),
            Err(e) => self.failed.push((tag, e)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// The first failure, for callers that treat any tagging failure as fatal
    pub fn into_result(self) -> Result<Vec<String>, Status> {
        match self.failed.into_iter().next() {
            Some((_, e)) => Err(e),
            None => Ok(self.applied),
        }
    }
}
