use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::traits::{validate_key, SettingsStore, StorageError, StorageResult};

type SettingsMap = BTreeMap<String, String>;

/// Settings persisted as one JSON object file on the local filesystem.
///
/// Writes go to a sibling temp file that is then renamed over the target, so a
/// crash never leaves a half-written settings file. A missing file reads as an
/// empty store.
#[derive(Debug)]
pub struct LocalSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalSettingsStore {
    /// Create a store backed by `path`, creating its parent directory if needed
    pub async fn new(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!(
                    path = %parent.display(),
                    error = %e,
                    "Failed to create settings directory"
                );
                e
            })?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> StorageResult<SettingsMap> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SettingsMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(SettingsMap::new());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            StorageError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn write_map(&self, map: &SettingsMap) -> StorageResult<()> {
        let data = serde_json::to_vec_pretty(map)?;
        let tmp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            keys = map.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Settings file written"
        );

        Ok(())
    }

    async fn update<F>(&self, apply: F) -> StorageResult<()>
    where
        F: FnOnce(&mut SettingsMap) -> bool + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        if apply(&mut map) {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for LocalSettingsStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
            true
        })
        .await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.update(|map| map.remove(key).is_some()).await
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
