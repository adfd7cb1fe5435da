
use crate::configuration::models::api_settings::ApiSettings;
use crate::contracts::annotation::{Annotation, AnnotationRequest};
use crate::contracts::meter_resource::{MeterId, MeterResource};
use crate::contracts::platform_metadata::PlatformMetadata;
use crate::services::audit::AuditService;
use crate::services::audit::events::meter_delete_audit_event::MeterDeleteAuditEvent;
use crate::services::audit::events::meter_modification_audit_event::{
    MeterModification, MeterModificationAuditEvent, ModificationResult,
};
use crate::services::base::state_store::{METER_ID_KEY, StateStore};
use crate::services::lifecycle::tagging_report::TaggingReport;
use crate::services::meter_api::headers::generate_headers;
use crate::services::meter_api::https_transport::HttpsTransport;
use crate::services::meter_api::request_builder::{Action, Endpoint, RequestBuilder};
use crate::services::meter_api::status::Status;
use crate::services::meter_api::status::not_found_details::NotFoundDetails;
use crate::services::meter_api::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::services::tag_extraction::{extract_cloud_tags, extract_lifecycle_annotation};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Url;
use serde_json::{Value, json};
use std::sync::Arc;

/// Create, find, tag, annotate and delete the remote meter of a host.
///
/// Every operation issues its requests one after another and returns the outcome to the caller.
/// Operations that address an existing meter resolve its id by name first, on every call.
pub struct MeterLifecycle {
    request_builder: RequestBuilder,
    api_key: String,
    transport: Arc<dyn Transport>,
    audit_service: Arc<dyn AuditService>,
}

impl MeterLifecycle {
    pub fn new(
        request_builder: RequestBuilder,
        api_key: String,
        transport: Arc<dyn Transport>,
        audit_service: Arc<dyn AuditService>,
    ) -> Self {
        MeterLifecycle {
            request_builder,
            api_key,
            transport,
            audit_service,
        }
    }

    /// Builds a lifecycle client talking HTTPS to the configured endpoint
    pub async fn from_settings(settings: &ApiSettings, audit_service: Arc<dyn AuditService>) -> Result<Self, Status> {
        let transport = HttpsTransport::from_settings(settings).await?;
        Ok(Self::new(
            RequestBuilder::new(Endpoint::from(settings)),
            settings.api_key.clone(),
            Arc::new(transport),
            audit_service,
        ))
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.request_builder
    }

    pub async fn create_meter(&self, meter: &MeterResource) -> Result<(), Status> {
        let url = self.request_builder.build_url(meter, Action::Create, None)?;
        let body = json!({ "name": meter.name }).to_string();

        info!("Creating meter [{}]", meter.name);
        let result = self.send(HttpMethod::Post, url, Some(body)).await.map(|_| ());

        self.audit_modification(Some(meter), MeterModification::Create, &result);
        result
    }

    /// `false` only when the search answers with an empty list.
    /// A failed search is an error, never `false`. A 404 from the search is [`Status::MeterNotFound`].
    pub async fn meter_exists(&self, meter: &MeterResource) -> Result<bool, Status> {
        let meters = self.search(meter).await?;
        Ok(!meters.is_empty())
    }

    pub async fn get_meter_id(&self, meter: &MeterResource) -> Result<MeterId, Status> {
        let meters = self.search(meter).await?;

        let first = meters
            .first()
            .ok_or_else(|| Status::MeterNotFound(NotFoundDetails::new(meter.name.clone())))?;

        match first.get("id") {
            Some(Value::String(id)) => Ok(MeterId::new(id.clone())),
            Some(Value::Number(id)) => Ok(MeterId::new(id.to_string())),
            _ => Err(Status::MalformedResponse(anyhow!(
                "Search result for meter [{}] has no id",
                meter.name
            ))),
        }
    }

    /// Resolves the meter id when the action needs one, then builds the url
    pub async fn resolve_url(&self, meter: &MeterResource, action: Action) -> Result<Url, Status> {
        if action.requires_meter_id() {
            let meter_id = self.get_meter_id(meter).await?;
            self.request_builder.build_url(meter, action, Some(&meter_id))
        } else {
            self.request_builder.build_url(meter, action, None)
        }
    }

    pub async fn delete_meter(&self, meter: &MeterResource) -> Result<(), Status> {
        let meter_id = self.get_meter_id(meter).await?;
        let url = self.request_builder.build_url(meter, Action::Delete, Some(&meter_id))?;

        info!("Deleting meter [{}]", meter.name);
        let result = self.send(HttpMethod::Delete, url, None).await.map(|_| ());

        let event = MeterDeleteAuditEvent::new(meter.name.clone(), Some(meter_id.into()), result.is_ok());
        if let Err(e) = self.audit_service.record_meter_deletion(event) {
            warn!("Failed to record meter deletion: {:?}", e);
        }
        result
    }

    pub async fn apply_tag(&self, meter: &MeterResource, tag: &str) -> Result<(), Status> {
        let meter_id = self.get_meter_id(meter).await?;
        let url = self.request_builder.tag_url(&meter_id, tag)?;

        info!("Applying meter tag [{}]", tag);
        let result = self.send(HttpMethod::Put, url, Some(String::new())).await.map(|_| ());

        self.audit_modification(Some(meter), MeterModification::Tag(tag.to_string()), &result);
        result
    }

    /// Applies tags in order, one request each. A failed tag does not stop the ones after it.
    pub async fn apply_tags(&self, meter: &MeterResource, tags: &[String]) -> TaggingReport {
        let mut report = TaggingReport::default();
        for tag in tags {
            let result = self.apply_tag(meter, tag).await;
            report.record(tag.clone(), result);
        }
        report
    }

    pub async fn apply_cloud_tags(&self, meter: &MeterResource, metadata: &PlatformMetadata) -> TaggingReport {
        if metadata.ec2.is_some() {
            debug!("This meter seems to be on EC2, applying ec2 based tags");
        }
        if metadata.opsworks.is_some() {
            debug!("This meter seems to be running AWS OpsWorks, applying OpsWorks based tags");
        }
        self.apply_tags(meter, &extract_cloud_tags(metadata)).await
    }

    pub async fn apply_meter_tags(&self, meter: &MeterResource, tags: &[String]) -> TaggingReport {
        debug!("This meter currently has these configured tags {:?}", tags);
        if tags.is_empty() {
            debug!("No meter tags to apply.");
        }
        self.apply_tags(meter, tags).await
    }

    /// Posts an annotation stamped with the current time.
    /// Returns the location of the created annotation when the service reports it.
    pub async fn create_annotation(
        &self,
        annotation_type: &str,
        subtype: &str,
        tags: Vec<String>,
    ) -> Result<Option<String>, Status> {
        self.create_annotation_at(AnnotationRequest::new(annotation_type, subtype, tags), Utc::now())
            .await
    }

    pub async fn create_annotation_at(
        &self,
        request: AnnotationRequest,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, Status> {
        self.post_annotation(None, &request.at(now)).await
    }

    /// Marks the OpsWorks lifecycle event in progress. `Ok(None)` when no event is running.
    pub async fn annotate_opsworks_lifecycle_event(
        &self,
        meter: &MeterResource,
        metadata: &PlatformMetadata,
    ) -> Result<Option<String>, Status> {
        let Some(request) = extract_lifecycle_annotation(metadata) else {
            debug!("No OpsWorks activity in progress, nothing to annotate");
            return Ok(None);
        };

        self.post_annotation(Some(meter), &request.at(Utc::now())).await
    }

    /// Looks up the meter id and persists it. Skipped when there is no state store.
    pub async fn save_meter_id(
        &self,
        meter: &MeterResource,
        state_store: Option<&dyn StateStore>,
    ) -> Result<Option<MeterId>, Status> {
        let Some(state_store) = state_store else {
            debug!("No state store configured, not attempting to save meter id.");
            return Ok(None);
        };

        let meter_id = self.get_meter_id(meter).await?;
        state_store
            .set(METER_ID_KEY, meter_id.to_string())
            .await
            .map_err(Status::State)?;
        debug!("Saved meter id {} for meter [{}]", meter_id, meter.name);
        Ok(Some(meter_id))
    }

    pub async fn delete_meter_id(&self, state_store: Option<&dyn StateStore>) -> Result<(), Status> {
        let Some(state_store) = state_store else {
            debug!("No state store configured, not attempting to delete meter id.");
            return Ok(());
        };
        state_store.remove(METER_ID_KEY).await.map_err(Status::State)
    }

    /// Every annotation is audited, against the meter it describes when there is one
    async fn post_annotation(
        &self,
        meter: Option<&MeterResource>,
        annotation: &Annotation,
    ) -> Result<Option<String>, Status> {
        let result = self.send_annotation(annotation).await;
        self.audit_modification(meter, MeterModification::Annotate(annotation.subtype.clone()), &result);
        result
    }

    async fn send_annotation(&self, annotation: &Annotation) -> Result<Option<String>, Status> {
        let url = self.request_builder.annotations_url()?;
        let body = serde_json::to_string(annotation)
            .map_err(|e| Status::Configuration(anyhow!("Annotation cannot be serialized: {}", e)))?;

        let response = self.send(HttpMethod::Post, url, Some(body)).await?;
        info!(
            "Created an annotation @ {}",
            response.location.as_deref().unwrap_or("unknown location")
        );
        Ok(response.location)
    }

    async fn search(&self, meter: &MeterResource) -> Result<Vec<Value>, Status> {
        let url = self.request_builder.build_url(meter, Action::Search, None)?;
        let response = self.send(HttpMethod::Get, url, None).await.map_err(|e| match e {
            Status::UnexpectedStatus(details) if details.code == 404 => {
                Status::MeterNotFound(NotFoundDetails::new(meter.name.clone()))
            }
            other => other,
        })?;
        match response.json::<Value>()? {
            Value::Array(meters) => Ok(meters),
            other => Err(Status::MalformedResponse(anyhow!(
                "Meter search returned {} instead of a list",
                other
            ))),
        }
    }

    async fn send(&self, method: HttpMethod, url: Url, body: Option<String>) -> Result<ApiResponse, Status> {
        let headers = generate_headers(&self.api_key)?;
        let mut request = ApiRequest::new(method, url, headers);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.transport.request(request).await
    }

    fn audit_modification<T>(
        &self,
        meter: Option<&MeterResource>,
        modification: MeterModification,
        result: &Result<T, Status>,
    ) {
        let meter = meter.map(|meter| meter.name.clone());
        let event = MeterModificationAuditEvent::new(meter, modification, ModificationResult::from(result));
        if let Err(e) = self.audit_service.record_meter_modification(event) {
            warn!("Failed to record meter modification: {:?}", e);
        }
    }
}
