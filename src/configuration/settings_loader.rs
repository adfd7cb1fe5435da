
use crate::configuration::models::MeterClientSettings;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use serde_yml::from_str;
use std::path::PathBuf;
use std::sync::Arc;

pub fn from_file() -> Arc<dyn SettingsLoader<ConfigSource = PathBuf>> {
    Arc::new(FileSettingsLoader)
}

pub fn from_string() -> Arc<dyn SettingsLoader<ConfigSource = String>> {
    Arc::new(InlineSettingsLoader)
}

#[async_trait]
pub trait SettingsLoader: Send + Sync {
    type ConfigSource;
    async fn load(&self, source: &Self::ConfigSource) -> anyhow::Result<MeterClientSettings>;
}

struct FileSettingsLoader;

#[async_trait]
impl SettingsLoader for FileSettingsLoader {
    type ConfigSource = PathBuf;

    async fn load(&self, source: &Self::ConfigSource) -> anyhow::Result<MeterClientSettings> {
        info!("Loading meter client settings from file: {:?}", source);
        let content = tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read settings file {:?}", source))?;
        let settings: MeterClientSettings = from_str(&content).context("Settings file is not valid")?;
        debug!("Meter client settings: {:?}", settings);
        Ok(settings)
    }
}

struct InlineSettingsLoader;

#[async_trait]
impl SettingsLoader for InlineSettingsLoader {
    type ConfigSource = String;

    async fn load(&self, source: &Self::ConfigSource) -> anyhow::Result<MeterClientSettings> {
        let settings: MeterClientSettings = from_str(source).context("Settings document is not valid")?;
        debug!("Meter client settings: {:?}", settings);
        Ok(settings)
    }
}
