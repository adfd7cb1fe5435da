use crate::services::meter_api::request_builder::Endpoint;
use duration_string::DurationString;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
pub struct ApiSettings {
    pub hostname: String,
    pub org_id: String,
    pub api_key: String,
    pub ca_bundle_path: PathBuf,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: DurationString,
}

fn default_request_timeout() -> DurationString {
    DurationString::from(DEFAULT_REQUEST_TIMEOUT)
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout.clone().into()
    }
}

impl Debug for ApiSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("hostname", &self.hostname)
            .field("org_id", &self.org_id)
            .field("api_key", &"<redacted>")
            .field("ca_bundle_path", &self.ca_bundle_path)
            .field("request_timeout", &self.request_timeout())
            .finish()
    }
}

impl From<&ApiSettings> for Endpoint {
    fn from(settings: &ApiSettings) -> Self {
        Endpoint::new(settings.hostname.clone(), settings.org_id.clone())
    }
}
