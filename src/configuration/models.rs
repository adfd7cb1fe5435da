pub mod api_settings;
pub mod log_settings;
pub mod meter_settings;
pub mod provisioning_settings;

use crate::configuration::models::api_settings::ApiSettings;
use crate::configuration::models::log_settings::LogSettings;
use crate::configuration::models::meter_settings::MeterSettings;
use crate::configuration::models::provisioning_settings::ProvisioningSettings;
use serde::Deserialize;

/// Root of the configuration document
#[derive(Debug, Deserialize)]
pub struct MeterClientSettings {
    pub api: ApiSettings,
    #[serde(default)]
    pub meter: MeterSettings,
    #[serde(default)]
    pub provisioning: ProvisioningSettings,
    #[serde(default)]
    pub log: LogSettings,
}
