//! Native Rust facade for vault operations
//! Every UI-facing call passes through the authentication gate first
use crate::domain::authentication::{AppActivity, AuthGate, GateState};
use crate::domain::vault::{
    backup_fingerprint, decode_backup, encode_backup, BackupError, ImportReport, Password,
    RecordStore, Settings, Tag, Toast, VaultError,
};
use crate::platform::Platform;
use crate::ports::IoError;
use std::sync::Arc;

const EXPORT_FAILED: &str = "An error occurred while trying to create the file";
const IMPORT_FAILED: &str = "Backup file import failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome<T> {
    Completed(T),
    /// The user backed out of the file dialog; nothing changed.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub bytes: usize,
    pub passwords: usize,
    pub fingerprint: String,
}

pub struct VaultManager {
    platform: Platform,
    store: RecordStore,
    gate: Arc<AuthGate>,
}

impl VaultManager {
    /// Rehydrates the store and arms the gate from the persisted settings.
    pub async fn open(platform: Platform) -> Self {
        let store = RecordStore::open(&platform).await;
        let gate = Arc::new(AuthGate::new(
            store.settings().enable_local_authentication,
        ));

        Self {
            platform,
            store,
            gate,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Shared handle so the host can report foreground changes from anywhere.
    pub fn gate(&self) -> Arc<AuthGate> {
        Arc::clone(&self.gate)
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Reports a foreground change and runs the challenge it requires, if any.
    pub async fn set_activity(&self, activity: AppActivity) -> GateState {
        if let Some(ticket) = self.gate.on_activity_change(activity) {
            self.gate.run_challenge(&self.platform, ticket).await;
        }
        self.gate.state()
    }

    pub fn passwords(&self) -> Result<&[Password], VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.passwords())
    }

    pub fn password(&self, id: &str) -> Result<Option<&Password>, VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.password(id))
    }

    pub fn passwords_by_tag(&self, tag_id: Option<&str>) -> Result<Vec<&Password>, VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.passwords_by_tag(tag_id))
    }

    pub fn search(&self, query: &str) -> Result<Vec<&Password>, VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.search(query))
    }

    pub fn tags(&self) -> Result<&[Tag], VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.tags())
    }

    pub fn settings(&self) -> Result<Settings, VaultError> {
        self.gate.ensure_unlocked()?;
        Ok(self.store.settings())
    }

    pub async fn add_password(&mut self, password: Password) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.add(password).await
    }

    pub async fn edit_password(&mut self, password: Password) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.edit(password).await
    }

    pub async fn delete_password(&mut self, id: &str) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.delete(id).await
    }

    pub async fn import_passwords(
        &mut self,
        passwords: Vec<Password>,
    ) -> Result<ImportReport, VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.import(passwords).await
    }

    pub async fn add_tag(&mut self, tag: Tag) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.add_tag(tag).await
    }

    pub async fn edit_tag(&mut self, tag: Tag) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.edit_tag(tag).await
    }

    pub async fn delete_tag(&mut self, id: &str) -> Result<(), VaultError> {
        self.gate.ensure_unlocked()?;
        self.store.delete_tag(id).await
    }

    /// Flips local authentication and re-arms the gate accordingly.
    pub async fn toggle_local_authentication(&mut self) -> Result<bool, VaultError> {
        self.gate.ensure_unlocked()?;
        let enabled = self.store.toggle_local_authentication().await;
        self.gate.set_enabled(enabled);
        Ok(enabled)
    }

    /// Retries a pending commit and reports whether storage caught up.
    pub async fn flush(&mut self) -> Result<(), VaultError> {
        self.store.flush().await.map_err(VaultError::from)
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.store.take_toasts()
    }

    /// Writes the vault to the backup file collaborator.
    ///
    /// An emptied vault still exports; only a vault that never reached storage
    /// has nothing to back up. Failures push a toast and are returned; a
    /// cancelled dialog is not a failure.
    pub async fn export_backup(&mut self) -> Result<BackupOutcome<ExportReport>, VaultError> {
        self.gate.ensure_unlocked()?;
        let result = self.write_backup().await;
        self.finish_backup_operation(result, EXPORT_FAILED)
    }

    /// Reads a backup file and merges its new records into the vault.
    pub async fn import_backup(&mut self) -> Result<BackupOutcome<ImportReport>, VaultError> {
        self.gate.ensure_unlocked()?;
        let result = self.read_backup().await;
        self.finish_backup_operation(result, IMPORT_FAILED)
    }

    async fn write_backup(&mut self) -> Result<ExportReport, VaultError> {
        if self.store.is_dirty() {
            self.store.flush().await?;
        }

        if self.store.vault().is_empty() && !self.store.has_snapshot().await? {
            return Err(BackupError::EmptyPayload.into());
        }

        let vault = self.store.vault();

        let bytes = encode_backup(vault)?;
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| BackupError::malformed("Encoded backup is not valid UTF-8"))?;

        self.platform.files().write_file(content).await?;

        let report = ExportReport {
            bytes: bytes.len(),
            passwords: vault.passwords.len(),
            fingerprint: backup_fingerprint(&bytes),
        };
        self.platform.logger().log(&format!(
            "Exported {} passwords ({} bytes, sha256 {})",
            report.passwords, report.bytes, report.fingerprint
        ));

        Ok(report)
    }

    async fn read_backup(&mut self) -> Result<ImportReport, VaultError> {
        let content = self.platform.files().read_file().await?;
        self.platform.logger().log(&format!(
            "Importing backup of {} bytes (sha256 {})",
            content.len(),
            backup_fingerprint(content.as_bytes())
        ));

        let imported = decode_backup(content.as_bytes())?;
        self.store.import_backup(imported).await
    }

    fn finish_backup_operation<T>(
        &mut self,
        result: Result<T, VaultError>,
        failure_title: &str,
    ) -> Result<BackupOutcome<T>, VaultError> {
        match result {
            Ok(value) => Ok(BackupOutcome::Completed(value)),
            Err(VaultError::Io(IoError::Cancelled)) => {
                self.platform.logger().log("Backup file dialog cancelled");
                Ok(BackupOutcome::Cancelled)
            }
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("{failure_title}: {e}"));
                self.store.push_toast(Toast::danger(failure_title));
                Err(e)
            }
        }
    }
}
