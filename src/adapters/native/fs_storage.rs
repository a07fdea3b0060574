use crate::domain::vault::error::PersistError;
use crate::ports::StoragePort;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const VALUE_EXTENSION: &str = "json";

/// Native key-value storage: one file per key under a root directory.
#[derive(Clone, Debug)]
pub struct FsStorage {
    root_path: PathBuf,
}

impl FsStorage {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Keys map to filesystem-safe names. ASCII alphanumerics and `-` are kept,
    /// every other byte becomes `_XX` (hex), so distinct keys never share a
    /// file: `persist:root` is stored as `persist_3Aroot.json`.
    fn get_full_path(&self, key: &str) -> PathBuf {
        let mut filename = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                filename.push(char::from(byte));
            } else {
                filename.push('_');
                filename.push_str(&hex::encode_upper([byte]));
            }
        }

        self.root_path.join(format!("{filename}.{VALUE_EXTENSION}"))
    }
}

#[async_trait(?Send)]
impl StoragePort for FsStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let full_path = self.get_full_path(key);
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::storage(format!("Failed to read {key}: {e}"))),
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so readers
    /// see either the old snapshot or the new one.
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let full_path = self.get_full_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|_| PersistError::storage("Failed to create storage directory"))?;
        }

        let tmp_path = full_path.with_extension(format!("{VALUE_EXTENSION}.tmp"));
        fs::write(&tmp_path, value)
            .map_err(|e| PersistError::storage(format!("Failed to write {key}: {e}")))?;

        fs::rename(&tmp_path, &full_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PersistError::storage(format!("Failed to commit {key}: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn temp_storage() -> FsStorage {
        let dir = std::env::temp_dir().join(format!("passvault-fs-{}", uuid::Uuid::new_v4()));
        FsStorage::new(dir)
    }

    #[test]
    fn test_get_full_path_escapes_key() {
        let storage = FsStorage::new("./passvault_data");
        let path = storage.get_full_path("persist:root");
        assert!(path.to_str().unwrap().ends_with("persist_3Aroot.json"));
    }

    #[test]
    fn test_distinct_keys_use_distinct_files() {
        let storage = FsStorage::new("./passvault_data");
        assert_ne!(storage.get_full_path("a:b"), storage.get_full_path("a_b"));
        assert_ne!(storage.get_full_path("a_3Ab"), storage.get_full_path("a:b"));
        assert!(storage
            .get_full_path("a_b")
            .to_str()
            .unwrap()
            .ends_with("a_5Fb.json"));
    }

    #[test]
    fn test_colliding_keys_keep_separate_values() {
        let storage = temp_storage();

        block_on(async {
            storage.set("a:b", "colon").await.unwrap();
            storage.set("a_b", "underscore").await.unwrap();
            assert_eq!(storage.get("a:b").await.unwrap().as_deref(), Some("colon"));
            assert_eq!(storage.get("a_b").await.unwrap().as_deref(), Some("underscore"));
        });

        let _ = fs::remove_dir_all(storage.root_path());
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let storage = temp_storage();
        assert_eq!(block_on(storage.get("persist:root")).unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let storage = temp_storage();

        block_on(async {
            storage.set("persist:root", "{\"a\":1}").await.unwrap();
            assert_eq!(
                storage.get("persist:root").await.unwrap().as_deref(),
                Some("{\"a\":1}")
            );

            storage.set("persist:root", "{\"a\":2}").await.unwrap();
            assert_eq!(
                storage.get("persist:root").await.unwrap().as_deref(),
                Some("{\"a\":2}")
            );
        });

        let leftover = storage.root_path().join("persist_3Aroot.json.tmp");
        assert!(!leftover.exists());
        let _ = fs::remove_dir_all(storage.root_path());
    }
}
