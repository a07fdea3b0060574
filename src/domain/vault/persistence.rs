use super::error::PersistError;
use super::types::{AppState, Vault};
use super::validation::validate_vault;
use crate::platform::Platform;

/// Maps application state to the key-value layer under a single root key.
///
/// Only the durable slices of [`Vault`] are written; transient slices such as
/// toasts never reach storage.
#[derive(Clone)]
pub struct VaultPersistence {
    platform: Platform,
    root_key: String,
}

impl VaultPersistence {
    pub fn new(platform: &Platform) -> Self {
        Self::with_root_key(platform, platform.config().root_key.clone())
    }

    pub fn with_root_key(platform: &Platform, root_key: impl Into<String>) -> Self {
        Self {
            platform: platform.clone(),
            root_key: root_key.into(),
        }
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Rehydrates the durable slices. `None` on first run, unreadable data, or
    /// a snapshot that fails record validation.
    pub async fn load(&self) -> Option<Vault> {
        let logger = self.platform.logger();

        let raw = match self.platform.storage().get(&self.root_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                logger.log("No persisted vault found; starting empty");
                return None;
            }
            Err(e) => {
                logger.error(&format!("Failed to read persisted vault: {e}"));
                return None;
            }
        };

        let parsed = serde_json::from_str::<Vault>(&raw)
            .map_err(|e| e.to_string())
            .and_then(|vault| match validate_vault(&vault) {
                Ok(()) => Ok(vault),
                Err(e) => Err(e.to_string()),
            });

        match parsed {
            Ok(vault) => {
                logger.log(&format!(
                    "Loaded vault with {} passwords and {} tags",
                    vault.passwords.len(),
                    vault.tags.len()
                ));
                Some(vault)
            }
            Err(e) => {
                logger.error(&format!("Persisted vault is corrupt, ignoring it: {e}"));
                None
            }
        }
    }

    /// True once a snapshot has been written under the root key.
    pub async fn has_snapshot(&self) -> Result<bool, PersistError> {
        Ok(self.platform.storage().get(&self.root_key).await?.is_some())
    }

    pub async fn save(&self, state: &AppState) -> Result<(), PersistError> {
        self.save_vault(&state.vault).await
    }

    pub async fn save_vault(&self, vault: &Vault) -> Result<(), PersistError> {
        let serialized = serde_json::to_string(vault)
            .map_err(|_| PersistError::serialization("Failed to serialize vault snapshot"))?;

        self.platform
            .storage()
            .set(&self.root_key, &serialized)
            .await
    }
}
