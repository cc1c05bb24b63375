mod auth_outcome;

use crate::{KeyValueStore, MemoryStore, StoreError, StoreResult};

use std::path::PathBuf;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

/// Memory store with switchable failures per operation.
#[derive(Default)]
pub(crate) struct FaultyStore {
    pub(crate) inner: MemoryStore,
    fail_get: AtomicBool,
    fail_remove: AtomicBool,
    fail_set_keys: StdMutex<Vec<String>>,
}

impl FaultyStore {
    pub(crate) fn fail_get(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_remove(&self) {
        self.fail_remove.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_set(&self, key: &str) {
        self.fail_set_keys.lock().unwrap().push(key.to_string());
    }

    fn injected(key: &str) -> std::io::Error {
        std::io::Error::other(format!("injected failure for {key}"))
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StoreError::file_read(PathBuf::from(key), Self::injected(key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let fail = self.fail_set_keys.lock().unwrap().iter().any(|k| k == key);
        if fail {
            return Err(StoreError::file_write(PathBuf::from(key), Self::injected(key)));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(StoreError::file_remove(PathBuf::from(key), Self::injected(key)));
        }
        self.inner.remove(key).await
    }
}

/// Memory store whose reads block until the gate is opened.
#[derive(Default)]
pub(crate) struct GatedStore {
    pub(crate) inner: MemoryStore,
    pub(crate) gate: Notify,
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.gate.notified().await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key).await
    }
}
