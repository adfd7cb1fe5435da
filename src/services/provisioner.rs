
use crate::configuration::models::MeterClientSettings;
use crate::configuration::models::provisioning_settings::ProvisioningSettings;
use crate::contracts::meter_resource::{MeterId, MeterResource};
use crate::contracts::platform_metadata::PlatformMetadata;
use crate::services::audit::AuditService;
use crate::services::backends::file::JsonFileStateStore;
use crate::services::base::state_store::StateStore;
use crate::services::lifecycle::failure_policy::{FailurePolicy, MissingMeterPolicy};
use crate::services::lifecycle::meter_lifecycle::MeterLifecycle;
use crate::services::lifecycle::tagging_report::TaggingReport;
use crate::services::meter_api::status::Status;
use log::info;
use std::sync::Arc;

/// What a provisioning run did
#[derive(Debug, Default)]
pub struct ProvisioningReport {
    pub created: bool,
    pub meter_id: Option<MeterId>,
    pub applied_tags: Vec<String>,
    pub annotation: Option<String>,
}

/// Drives a full provisioning or teardown run for the host's meter.
///
/// Failing to find out whether the meter exists, or to create it, always ends the run.
/// Tagging and annotation failures follow the configured [`FailurePolicy`].
pub struct MeterProvisioner {
    lifecycle: Arc<MeterLifecycle>,
    state_store: Option<Arc<dyn StateStore>>,
    configured_tags: Vec<String>,
    tag_failure_policy: FailurePolicy,
    annotation_failure_policy: FailurePolicy,
    missing_meter_policy: MissingMeterPolicy,
}

impl MeterProvisioner {
    pub fn new(
        lifecycle: Arc<MeterLifecycle>,
        state_store: Option<Arc<dyn StateStore>>,
        configured_tags: Vec<String>,
        settings: &ProvisioningSettings,
    ) -> Self {
        MeterProvisioner {
            lifecycle,
            state_store,
            configured_tags,
            tag_failure_policy: settings.tag_failure_policy,
            annotation_failure_policy: settings.annotation_failure_policy,
            missing_meter_policy: settings.missing_meter_on_delete,
        }
    }

    pub async fn from_settings(
        settings: &MeterClientSettings,
        audit_service: Arc<dyn AuditService>,
    ) -> Result<Self, Status> {
        let lifecycle = MeterLifecycle::from_settings(&settings.api, audit_service).await?;
        let state_store = settings
            .provisioning
            .state_file
            .as_ref()
            .map(|path| Arc::new(JsonFileStateStore::new(path.clone())) as Arc<dyn StateStore>);
        Ok(Self::new(
            Arc::new(lifecycle),
            state_store,
            settings.meter.tags.clone(),
            &settings.provisioning,
        ))
    }

    pub async fn provision(
        &self,
        meter: &MeterResource,
        metadata: &PlatformMetadata,
    ) -> Result<ProvisioningReport, Status> {
        let mut report = ProvisioningReport::default();

        if self.lifecycle.meter_exists(meter).await? {
            info!("Meter [{}] already exists", meter.name);
        } else {
            self.lifecycle.create_meter(meter).await?;
            report.created = true;
        }

        report.meter_id = self
            .lifecycle
            .save_meter_id(meter, self.state_store.as_deref())
            .await?;

        let cloud_tags = self.lifecycle.apply_cloud_tags(meter, metadata).await;
        report.applied_tags.extend(self.settle_tags(cloud_tags)?);
        let meter_tags = self.lifecycle.apply_meter_tags(meter, &self.configured_tags).await;
        report.applied_tags.extend(self.settle_tags(meter_tags)?);

        let annotation = self
            .lifecycle
            .annotate_opsworks_lifecycle_event(meter, metadata)
            .await;
        report.annotation = self
            .annotation_failure_policy
            .apply("create lifecycle annotation", annotation)?
            .flatten();

        Ok(report)
    }

    /// Deletes the meter and forgets its id. Returns whether the meter was registered.
    pub async fn deprovision(&self, meter: &MeterResource) -> Result<bool, Status> {
        let existed = self
            .missing_meter_policy
            .apply(self.lifecycle.delete_meter(meter).await)?;
        if !existed {
            info!("Meter [{}] is not registered, nothing to delete", meter.name);
        }

        self.lifecycle.delete_meter_id(self.state_store.as_deref()).await?;
        Ok(existed)
    }

    fn settle_tags(&self, report: TaggingReport) -> Result<Vec<String>, Status> {
        let TaggingReport { applied, failed } = report;
        for (tag, e) in failed {
            self.tag_failure_policy
                .apply::<()>(&format!("apply meter tag [{}]", tag), Err(e))?;
        }
        Ok(applied)
    }
}
