pub mod error;
pub mod merge;
pub mod persistence;
pub mod serialization;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{BackupError, PersistError, VaultError};
pub use merge::{merge_by_id, merge_passwords, merge_tags, Identified, MergeOutcome};
pub use persistence::VaultPersistence;
pub use serialization::{backup_fingerprint, decode_backup, encode_backup, ImportedPasswords};
pub use store::{ImportReport, RecordStore};
pub use types::{AppState, Password, Settings, Tag, Toast, ToastKind, Vault};
pub use validation::{validate_password, validate_tag};
