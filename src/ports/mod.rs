/// Ports module - Defines the interfaces (traits) that abstract the vault's external collaborators.
///
/// The domain layer only talks to storage, backup files, the local-authentication
/// prompt and the logger through these traits. Adapters live in `crate::adapters`.

pub mod authenticator;
pub mod file;
pub mod logger;
pub mod storage;

pub use authenticator::{AuthOutcome, AuthenticatorPort};
pub use file::{FilePort, IoError};
pub use logger::LoggerPort;
pub use storage::StoragePort;
