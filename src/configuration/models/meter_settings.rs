use crate::contracts::meter_resource::MeterResource;
use crate::contracts::platform_metadata::PlatformMetadata;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct MeterSettings {
    /// Meter name override. The host FQDN is used when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Static tags applied to the meter on every provisioning run
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MeterSettings {
    pub fn meter_resource(&self, metadata: &PlatformMetadata) -> MeterResource {
        match &self.name {
            Some(name) => MeterResource::new(name.clone()),
            None => MeterResource::new(metadata.host_name()),
        }
    }
}
