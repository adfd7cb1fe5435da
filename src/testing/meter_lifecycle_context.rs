use crate::services::lifecycle::meter_lifecycle::MeterLifecycle;
use crate::services::meter_api::request_builder::{Endpoint, RequestBuilder};
use crate::services::meter_api::transport::{ApiResponse, HttpMethod};
use crate::testing::recording_audit_service::RecordingAuditService;
use crate::testing::recording_transport::RecordingTransport;
use std::sync::Arc;
use test_context::AsyncTestContext;

pub const TEST_API_KEY: &str = "test-api-key";
pub const METERS_PATH: &str = "/org1/meters";
pub const ANNOTATIONS_PATH: &str = "/org1/annotations";

/// A lifecycle client for `https://api.example.com/org1` backed by a recording transport
pub struct MeterLifecycleContext {
    pub transport: Arc<RecordingTransport>,
    pub audit: Arc<RecordingAuditService>,
    pub lifecycle: Arc<MeterLifecycle>,
}

impl MeterLifecycleContext {
    /// Makes the search endpoint answer with a single meter with the given id
    pub fn with_meter(&self, id: &str) {
        self.transport.respond(
            HttpMethod::Get,
            METERS_PATH,
            ApiResponse::new(200, format!(r#"[{{"id": "{}", "name": "host-a"}}]"#, id)),
        );
    }

    pub fn without_meter(&self) {
        self.transport
            .respond(HttpMethod::Get, METERS_PATH, ApiResponse::new(200, "[]"));
    }

    pub fn meter_path(id: &str) -> String {
        format!("{}/{}", METERS_PATH, id)
    }

    pub fn tag_path(id: &str, tag: &str) -> String {
        format!("{}/{}/tags/{}", METERS_PATH, id, tag)
    }
}

impl AsyncTestContext for MeterLifecycleContext {
    async fn setup() -> Self {
        let transport = Arc::new(RecordingTransport::default());
        let audit = Arc::new(RecordingAuditService::default());
        let lifecycle = Arc::new(MeterLifecycle::new(
            RequestBuilder::new(Endpoint::new("api.example.com", "org1")),
            TEST_API_KEY.to_string(),
            transport.clone(),
            audit.clone(),
        ));
        MeterLifecycleContext {
            transport,
            audit,
            lifecycle,
        }
    }
}
