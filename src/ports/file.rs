use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// The user dismissed the picker. Not a failure.
    Cancelled,
    Failed(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Cancelled => write!(f, "File operation cancelled"),
            IoError::Failed(msg) => write!(f, "IO Error: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl IoError {
    pub fn failed(message: impl Into<String>) -> Self {
        IoError::Failed(message.into())
    }
}

/// Port for the device file picker / writer used by backup export and restore.
#[async_trait(?Send)]
pub trait FilePort: Send + Sync {
    async fn read_file(&self) -> Result<String, IoError>;

    async fn write_file(&self, content: &str) -> Result<(), IoError>;
}
