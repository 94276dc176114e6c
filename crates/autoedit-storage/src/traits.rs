//! Settings store abstraction

use async_trait::async_trait;
use autoedit_core::AppError;
use thiserror::Error;

/// Settings storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),

    #[error("Settings file is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// String key/value store for persisted settings.
///
/// Values are opaque strings; structured settings are stored as JSON text by
/// the caller. Removing a key that does not exist is not an error.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Name of the backend, for health reporting
    fn backend_name(&self) -> &'static str;
}

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}
