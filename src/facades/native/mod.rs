pub mod vault;

pub use vault::{BackupOutcome, ExportReport, VaultManager};
