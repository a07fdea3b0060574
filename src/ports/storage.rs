use crate::domain::vault::error::PersistError;
use async_trait::async_trait;

/// Port for the durable key-value layer the vault snapshot is written to.
#[async_trait(?Send)]
pub trait StoragePort: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
}
