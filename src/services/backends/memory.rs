
use crate::services::base::state_store::StateStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub type InMemoryStateStore = RwLock<HashMap<String, String>>;

#[async_trait]
impl StateStore for RwLock<HashMap<String, String>> {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let read_guard = self.read().await;
        Ok((*read_guard).get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        let mut write_guard = self.write().await;
        (*write_guard).insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut write_guard = self.write().await;
        (*write_guard).remove(key);
        Ok(())
    }
}
