//! Artifact storage on a capability directory.
//!
//! All access goes through a [`cap_std::fs_utf8::Dir`] handle, so stored
//! paths cannot reach outside the storage root.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::composer::ports::{
    ArtifactStorage, StorageError, StorageResult, validate_relative_path,
};

/// Filesystem-backed artifact storage.
#[derive(Debug, Clone)]
pub struct FsArtifactStorage {
    root: Arc<Dir>,
}

impl FsArtifactStorage {
    /// Wraps an open directory handle.
    #[must_use]
    pub fn new(root: Dir) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Opens `path` as the storage root, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        std::fs::create_dir_all(path).map_err(StorageError::io)?;
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::io)?;
        Ok(Self::new(root))
    }

    async fn run_blocking<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let root = Arc::clone(&self.root);
        tokio::task::spawn_blocking(move || f(&root))
            .await
            .map_err(StorageError::io)?
            .map_err(StorageError::io)
    }
}

#[async_trait]
impl ArtifactStorage for FsArtifactStorage {
    async fn put(&self, path: &str, content: Vec<u8>) -> StorageResult<()> {
        let target = validate_relative_path(path)?.to_owned();
        self.run_blocking(move |root| {
            if let Some(parent) = target.parent().filter(|parent| !parent.as_str().is_empty()) {
                root.create_dir_all(parent)?;
            }
            root.write(&target, content)
        })
        .await
    }

    async fn get(&self, path: &str) -> StorageResult<Option<Vec<u8>>> {
        let target = validate_relative_path(path)?.to_owned();
        self.run_blocking(move |root| match root.read(&target) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }
}
