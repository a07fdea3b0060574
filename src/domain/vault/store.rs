use super::error::{PersistError, VaultError};
use super::merge::{merge_passwords, merge_tags};
use super::persistence::VaultPersistence;
use super::serialization::ImportedPasswords;
use super::types::{AppState, Password, Settings, Tag, Toast, Vault};
use super::validation::{validate_password, validate_tag};
use crate::platform::Platform;
use crate::ports::LoggerPort;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub accepted: usize,
    pub skipped: usize,
    pub tags_accepted: usize,
}

/// Single owner of all passwords, tags and settings.
///
/// Every successful mutation is committed as a full snapshot. A failed commit
/// leaves the in-memory state in place and is retried by the next one.
pub struct RecordStore {
    state: AppState,
    persistence: VaultPersistence,
    logger: &'static dyn LoggerPort,
    dirty: bool,
}

impl RecordStore {
    /// Rehydrates from storage, falling back to an empty vault.
    pub async fn open(platform: &Platform) -> Self {
        let persistence = VaultPersistence::new(platform);
        let vault = persistence.load().await.unwrap_or_default();
        Self::from_parts(platform, persistence, vault)
    }

    pub fn from_parts(platform: &Platform, persistence: VaultPersistence, vault: Vault) -> Self {
        Self {
            state: AppState {
                vault,
                toasts: Vec::new(),
            },
            persistence,
            logger: platform.logger(),
            dirty: false,
        }
    }

    pub fn vault(&self) -> &Vault {
        &self.state.vault
    }

    pub fn passwords(&self) -> &[Password] {
        &self.state.vault.passwords
    }

    pub fn tags(&self) -> &[Tag] {
        &self.state.vault.tags
    }

    pub fn settings(&self) -> Settings {
        self.state.vault.settings
    }

    pub fn password(&self, id: &str) -> Option<&Password> {
        self.passwords().iter().find(|p| p.id == id)
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags().iter().find(|t| t.id == id)
    }

    /// `None` selects untagged passwords.
    pub fn passwords_by_tag(&self, tag_id: Option<&str>) -> Vec<&Password> {
        self.passwords()
            .iter()
            .filter(|p| p.tag_id.as_deref() == tag_id)
            .collect()
    }

    /// Case-insensitive match on name, url, username and email.
    pub fn search(&self, query: &str) -> Vec<&Password> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.passwords().iter().collect();
        }

        let matches = |field: &Option<String>| {
            field
                .as_deref()
                .map(|v| v.to_lowercase().contains(&needle))
                .unwrap_or(false)
        };

        self.passwords()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || matches(&p.url)
                    || matches(&p.username)
                    || matches(&p.email)
            })
            .collect()
    }

    /// True when the last commit failed and storage is behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.state.toasts.push(toast);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.state.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.state.toasts)
    }

    pub async fn add(&mut self, password: Password) -> Result<(), VaultError> {
        let password = password.normalized();
        validate_password(&password)?;
        if self.password(&password.id).is_some() {
            return Err(VaultError::duplicate_id(password.id.clone()));
        }

        self.state.vault.passwords.push(password);
        self.commit().await;
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub async fn edit(&mut self, password: Password) -> Result<(), VaultError> {
        let password = password.normalized();
        validate_password(&password)?;
        let slot = self
            .state
            .vault
            .passwords
            .iter_mut()
            .find(|p| p.id == password.id)
            .ok_or_else(|| VaultError::not_found(password.id.clone()))?;

        *slot = password;
        self.commit().await;
        Ok(())
    }

    /// Removing an unknown id is a no-op.
    pub async fn delete(&mut self, id: &str) -> Result<(), VaultError> {
        let before = self.state.vault.passwords.len();
        self.state.vault.passwords.retain(|p| p.id != id);

        if self.state.vault.passwords.len() != before {
            self.commit().await;
        }
        Ok(())
    }

    /// Appends the passwords whose ids are not yet known, in incoming order.
    pub async fn import(&mut self, passwords: Vec<Password>) -> Result<ImportReport, VaultError> {
        self.import_backup(ImportedPasswords {
            passwords,
            tags: Vec::new(),
        })
        .await
    }

    /// Merges tags first so imported `tagId`s resolve, then passwords.
    /// Existing records are never touched. One commit covers both.
    pub async fn import_backup(
        &mut self,
        imported: ImportedPasswords,
    ) -> Result<ImportReport, VaultError> {
        if imported.is_empty() {
            return Ok(ImportReport::default());
        }

        let incoming: Vec<Password> = imported
            .passwords
            .into_iter()
            .map(Password::normalized)
            .collect();
        for password in &incoming {
            validate_password(password)?;
        }
        for tag in &imported.tags {
            validate_tag(tag)?;
        }

        let tags = merge_tags(&self.state.vault.tags, imported.tags);
        let passwords = merge_passwords(&self.state.vault.passwords, incoming);

        let report = ImportReport {
            accepted: passwords.accepted.len(),
            skipped: passwords.skipped,
            tags_accepted: tags.accepted.len(),
        };

        if tags.is_noop() && passwords.is_noop() {
            return Ok(report);
        }

        self.state.vault.tags.extend(tags.accepted);
        self.state.vault.passwords.extend(passwords.accepted);
        self.commit().await;

        self.logger.log(&format!(
            "Imported {} passwords ({} already present) and {} tags",
            report.accepted, report.skipped, report.tags_accepted
        ));

        Ok(report)
    }

    pub async fn add_tag(&mut self, tag: Tag) -> Result<(), VaultError> {
        validate_tag(&tag)?;
        if self.tag(&tag.id).is_some() {
            return Err(VaultError::duplicate_id(tag.id.clone()));
        }

        self.state.vault.tags.push(tag);
        self.commit().await;
        Ok(())
    }

    pub async fn edit_tag(&mut self, tag: Tag) -> Result<(), VaultError> {
        validate_tag(&tag)?;
        let slot = self
            .state
            .vault
            .tags
            .iter_mut()
            .find(|t| t.id == tag.id)
            .ok_or_else(|| VaultError::not_found(tag.id.clone()))?;

        *slot = tag;
        self.commit().await;
        Ok(())
    }

    /// Deletes a tag and marks every password that referenced it as untagged.
    pub async fn delete_tag(&mut self, id: &str) -> Result<(), VaultError> {
        let before = self.state.vault.tags.len();
        self.state.vault.tags.retain(|t| t.id != id);
        if self.state.vault.tags.len() == before {
            return Ok(());
        }

        for password in self.state.vault.passwords.iter_mut() {
            if password.tag_id.as_deref() == Some(id) {
                password.tag_id = None;
            }
        }

        self.commit().await;
        Ok(())
    }

    /// Flips `enable_local_authentication` and returns the new value.
    pub async fn toggle_local_authentication(&mut self) -> bool {
        let settings = &mut self.state.vault.settings;
        settings.enable_local_authentication = !settings.enable_local_authentication;
        let enabled = settings.enable_local_authentication;

        self.commit().await;
        enabled
    }

    /// True once any state has reached storage, even if it is now empty.
    pub async fn has_snapshot(&self) -> Result<bool, PersistError> {
        self.persistence.has_snapshot().await
    }

    /// Writes the current snapshot, surfacing the error to the caller.
    pub async fn flush(&mut self) -> Result<(), PersistError> {
        let result = self.persistence.save(&self.state).await;
        self.dirty = result.is_err();
        result
    }

    async fn commit(&mut self) {
        if let Err(e) = self.flush().await {
            self.logger
                .error(&format!("Failed to persist vault, keeping in-memory state: {e}"));
        }
    }
}
