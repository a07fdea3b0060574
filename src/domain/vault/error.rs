use crate::ports::IoError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    Storage(String),
    Serialization(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            PersistError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
        }
    }
}

impl std::error::Error for PersistError {}

impl PersistError {
    pub fn storage(message: impl Into<String>) -> Self {
        PersistError::Storage(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        PersistError::Serialization(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupError {
    MalformedPayload(String),
    EmptyPayload,
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::MalformedPayload(msg) => write!(f, "Malformed backup payload: {msg}"),
            BackupError::EmptyPayload => write!(f, "Backup payload is empty"),
        }
    }
}

impl std::error::Error for BackupError {}

impl BackupError {
    pub fn malformed(message: impl Into<String>) -> Self {
        BackupError::MalformedPayload(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    NotFound(String),
    DuplicateId(String),
    InvalidRecord(String),
    Locked,
    Persist(PersistError),
    Backup(BackupError),
    Io(IoError),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::NotFound(id) => write!(f, "Record not found: {id}"),
            VaultError::DuplicateId(id) => write!(f, "Record already exists: {id}"),
            VaultError::InvalidRecord(msg) => write!(f, "Invalid record: {msg}"),
            VaultError::Locked => write!(f, "Vault is locked"),
            VaultError::Persist(e) => write!(f, "{e}"),
            VaultError::Backup(e) => write!(f, "{e}"),
            VaultError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for VaultError {}

impl VaultError {
    pub fn not_found(id: impl Into<String>) -> Self {
        VaultError::NotFound(id.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        VaultError::DuplicateId(id.into())
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        VaultError::InvalidRecord(message.into())
    }
}

impl From<PersistError> for VaultError {
    fn from(error: PersistError) -> Self {
        VaultError::Persist(error)
    }
}

impl From<BackupError> for VaultError {
    fn from(error: BackupError) -> Self {
        VaultError::Backup(error)
    }
}

impl From<IoError> for VaultError {
    fn from(error: IoError) -> Self {
        VaultError::Io(error)
    }
}
