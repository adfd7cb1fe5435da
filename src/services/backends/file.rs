
use crate::services::base::state_store::StateStore;
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Node state kept as a flat JSON object in a file.
/// Every call reads the whole file, there is no locking between processes.
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStateStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("State file {:?} is not a JSON object of strings", self.path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read state file {:?}", self.path)),
        }
    }

    async fn write_all(&self, state: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(state)?;
        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write state file {:?}", self.path))
    }
}

#[async_trait]
impl StateStore for JsonFileStateStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let state = self.read_all().await?;
        Ok(state.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        let mut state = self.read_all().await?;
        state.insert(key.to_string(), value);
        debug!("Saving {:?} to {:?}", key, self.path);
        self.write_all(&state).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut state = self.read_all().await?;
        if state.remove(key).is_some() {
            debug!("Removing {:?} from {:?}", key, self.path);
            self.write_all(&state).await?;
        }
        Ok(())
    }
}
