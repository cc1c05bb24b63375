//! File-backed key-value store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes use the atomic pattern:
//!
//! 1. Write to a temp file next to the target
//! 2. Sync to disk (fsync)
//! 3. Rename over the target
//!
//! A crash mid-write leaves either the old value or the new one, never a
//! truncated record.

use crate::{KeyValueStore, StoreError, StoreResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

const RECORD_EXTENSION: &str = "json";

static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Durable store rooted at a directory.
///
/// The directory is created lazily on first write, so a fresh install
/// reads every key as absent.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are restricted to ASCII alphanumerics, `_` and `-` so they can
    /// never address anything outside the store directory.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(StoreError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.{RECORD_EXTENSION}")))
    }

    /// Temp file for one write of `key`, unique per process and per write.
    pub(crate) fn temp_path_for(&self, key: &str) -> PathBuf {
        let seq = TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(
            "{key}.{RECORD_EXTENSION}.tmp.{}.{seq}",
            std::process::id()
        ))
    }

    async fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No record for '{key}' at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.temp_path_for(key);

        if let Err(e) = Self::write_synced(&temp_path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::file_write(temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Saved record '{key}' to {final_path:?}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed record '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path, e)),
        }
    }
}
