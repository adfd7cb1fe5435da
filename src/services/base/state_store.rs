use async_trait::async_trait;

/// Key under which the meter id is persisted between runs
pub const METER_ID_KEY: &str = "boundary.bprobe.id";

#[async_trait]
/// Represents the host's persistent node state
pub trait StateStore: Send + Sync {
    /// Reads a value, `None` when the key was never written
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Writes a value, replacing any previous one
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()>;

    /// Removes a value. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
