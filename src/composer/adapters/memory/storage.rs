//! In-memory artifact storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::composer::ports::{
    ArtifactStorage, StorageError, StorageResult, validate_relative_path,
};

/// Thread-safe in-memory artifact storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryArtifactStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored paths in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the lock is poisoned.
    pub fn paths(&self) -> StorageResult<Vec<String>> {
        let objects = self
            .objects
            .read()
            .map_err(|err| StorageError::io(std::io::Error::other(err.to_string())))?;
        let mut paths: Vec<String> = objects.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }
}

#[async_trait]
impl ArtifactStorage for InMemoryArtifactStorage {
    async fn put(&self, path: &str, content: Vec<u8>) -> StorageResult<()> {
        let key = validate_relative_path(path)?;
        self.objects
            .write()
            .map_err(|err| StorageError::io(std::io::Error::other(err.to_string())))?
            .insert(key.as_str().to_owned(), content);
        Ok(())
    }

    async fn get(&self, path: &str) -> StorageResult<Option<Vec<u8>>> {
        let key = validate_relative_path(path)?;
        let objects = self
            .objects
            .read()
            .map_err(|err| StorageError::io(std::io::Error::other(err.to_string())))?;
        Ok(objects.get(key.as_str()).cloned())
    }
}
