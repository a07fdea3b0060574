// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod config;
pub mod facades;
pub mod generator;

pub use config::Config;
pub use domain::authentication::{AppActivity, AuthError, AuthGate, GateState};
pub use domain::vault::{
    BackupError, ImportReport, ImportedPasswords, PersistError, Password, RecordStore, Settings,
    Tag, Toast, ToastKind, Vault, VaultError,
};
pub use facades::native::{BackupOutcome, ExportReport, VaultManager};
pub use generator::generate_password;
pub use platform::Platform;
