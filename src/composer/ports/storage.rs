//! Artifact storage port.

use async_trait::async_trait;
use camino::{Utf8Component, Utf8Path};
use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte storage addressed by relative `/`-separated paths.
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Stores `content` at `path`, replacing any previous content.
    async fn put(&self, path: &str, content: Vec<u8>) -> StorageResult<()>;

    /// Returns the content at `path`, if any.
    async fn get(&self, path: &str) -> StorageResult<Option<Vec<u8>>>;
}

/// Errors returned by storage adapters.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The path is absolute or escapes the storage root.
    #[error("invalid storage path: {0}")]
    InvalidPath(String),

    /// I/O failure in the backing store.
    #[error("storage I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps an I/O error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Checks that `path` is a non-empty relative path of plain segments.
///
/// # Errors
///
/// Returns [`StorageError::InvalidPath`] otherwise.
pub fn validate_relative_path(path: &str) -> StorageResult<&Utf8Path> {
    let candidate = Utf8Path::new(path);
    let plain = candidate
        .components()
        .all(|component| matches!(component, Utf8Component::Normal(_)));
    if path.is_empty() || !plain {
        return Err(StorageError::InvalidPath(path.to_owned()));
    }
    Ok(candidate)
}
