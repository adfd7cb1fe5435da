
use anyhow::Context;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Facts about the host and the platform it runs on, as reported by the configuration
/// management agent. Every source is optional and checked independently.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PlatformMetadata {
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default)]
    pub ec2: Option<Ec2Metadata>,
    #[serde(default)]
    pub opsworks: Option<OpsWorksMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Ec2Metadata {
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default)]
    pub placement_availability_zone: Option<String>,
    #[serde(default)]
    pub instance_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OpsWorksMetadata {
    #[serde(default)]
    pub stack: Option<OpsWorksStack>,
    #[serde(default)]
    pub instance: Option<OpsWorksInstance>,
    #[serde(default)]
    pub applications: Vec<OpsWorksApplication>,
    /// Name of the lifecycle event currently being run (setup, configure, deploy...)
    #[serde(default)]
    pub activity: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OpsWorksStack {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OpsWorksInstance {
    #[serde(default)]
    pub layers: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OpsWorksApplication {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub application_type: Option<String>,
}

impl PlatformMetadata {
    /// Reads a node attributes JSON document. Unknown attributes are ignored.
    pub async fn from_file(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading platform metadata from {:?}", path);
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read platform metadata from {:?}", path))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Platform metadata is not a valid node attributes document")
    }

    pub fn host_name(&self) -> &str {
        self.fqdn.as_deref().unwrap_or("unknown")
    }
}
