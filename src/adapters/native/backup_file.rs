use crate::ports::{FilePort, IoError};
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Backup file collaborator bound to a fixed path.
///
/// A missing file on read is reported as a cancelled pick.
#[derive(Clone, Debug)]
pub struct BackupFile {
    path: PathBuf,
}

impl BackupFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl FilePort for BackupFile {
    async fn read_file(&self) -> Result<String, IoError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(IoError::Cancelled),
            Err(e) => Err(IoError::failed(format!("Failed to read backup file: {e}"))),
        }
    }

    async fn write_file(&self, content: &str) -> Result<(), IoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| IoError::failed(format!("Failed to create directory: {e}")))?;
            }
        }

        fs::write(&self.path, content)
            .map_err(|e| IoError::failed(format!("Failed to write backup file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn temp_file() -> BackupFile {
        let dir = std::env::temp_dir().join(format!("passvault-backup-{}", uuid::Uuid::new_v4()));
        BackupFile::new(dir.join("backup.json"))
    }

    #[test]
    fn test_missing_file_is_cancelled() {
        let file = temp_file();
        assert_eq!(block_on(file.read_file()), Err(IoError::Cancelled));
    }

    #[test]
    fn test_write_then_read() {
        let file = temp_file();
        block_on(file.write_file("{\"passwords\":[]}")).unwrap();
        assert_eq!(block_on(file.read_file()).unwrap(), "{\"passwords\":[]}");

        if let Some(dir) = file.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
