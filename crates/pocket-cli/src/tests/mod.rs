mod app;

use crate::App;

use pocket_config::ValidationConfig;
use pocket_store::{KeyValueStore, MemoryStore, SessionStore, StoreError, StoreResult};

use std::path::PathBuf;

use async_trait::async_trait;

/// App over in-memory storage with default form limits
pub(crate) fn memory_app() -> App<MemoryStore> {
    App::new(
        SessionStore::new(MemoryStore::new()),
        ValidationConfig::default(),
    )
}

/// Storage that reads as empty and rejects every write.
pub(crate) struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from(key),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ))
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        Err(StoreError::file_remove(
            PathBuf::from(key),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ))
    }
}

/// App whose storage rejects every write
pub(crate) fn read_only_app() -> App<ReadOnlyStore> {
    App::new(SessionStore::new(ReadOnlyStore), ValidationConfig::default())
}
