/// Native adapters - implementations for desktop and test builds.

pub mod backup_file;
pub mod console_logger;
pub mod fs_storage;
pub mod memory_storage;
pub mod system_authenticator;

pub use backup_file::BackupFile;
pub use console_logger::ConsoleLogger;
pub use fs_storage::FsStorage;
pub use memory_storage::MemoryStorage;
pub use system_authenticator::SystemAuthenticator;
