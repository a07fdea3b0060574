//! Platform - Dependency injection container for all ports.
//!
//! Hybrid approach:
//! - Stateless ports: `&'static` references (zero-cost)
//! - Stateful ports: `Arc<dyn Trait>` (ref-counted, swappable for tests)
use crate::adapters::native::{BackupFile, FsStorage, SystemAuthenticator};
use crate::config::{Config, CONFIG};
use crate::ports::{AuthenticatorPort, FilePort, LoggerPort, StoragePort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    storage: Arc<dyn StoragePort>,
    files: Arc<dyn FilePort>,
    authenticator: Arc<dyn AuthenticatorPort>,
    config: Arc<Config>,
}

impl Platform {
    /// Creates a new Platform with the native adapters configured from the environment.
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            logger: crate::adapters::logger(),
            storage: Arc::new(FsStorage::new(config.data_dir.clone())),
            files: Arc::new(BackupFile::new(config.backup_path.clone())),
            authenticator: Arc::new(SystemAuthenticator::new()),
            config: Arc::new(config),
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn StoragePort>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_files(mut self, files: Arc<dyn FilePort>) -> Self {
        self.files = files;
        self
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn AuthenticatorPort>) -> Self {
        self.authenticator = authenticator;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn storage(&self) -> &dyn StoragePort {
        self.storage.as_ref()
    }

    #[inline]
    pub fn files(&self) -> &dyn FilePort {
        self.files.as_ref()
    }

    #[inline]
    pub fn authenticator(&self) -> &dyn AuthenticatorPort {
        self.authenticator.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
