use crate::domain::vault::error::PersistError;
use crate::ports::StoragePort;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-process key-value storage. Contents are lost with the process.
///
/// Reads and writes can be made to fail to exercise recovery paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait(?Send)]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistError::storage("memory storage read failure"));
        }
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistError::storage("memory storage write failure"));
        }
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        block_on(storage.set("k", "v")).unwrap();
        assert_eq!(block_on(storage.get("k")).unwrap().as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_failed_write_leaves_previous_value() {
        let storage = MemoryStorage::new();
        block_on(storage.set("k", "v1")).unwrap();

        storage.fail_writes(true);
        assert!(block_on(storage.set("k", "v2")).is_err());

        assert_eq!(block_on(storage.get("k")).unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_failed_read() {
        let storage = MemoryStorage::new();
        storage.fail_reads(true);
        assert!(block_on(storage.get("k")).is_err());
    }
}
