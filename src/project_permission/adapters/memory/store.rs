//! In-memory project store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project_permission::ports::{ProjectStore, ProjectStoreError, ProjectStoreResult};

/// Thread-safe in-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    names: Arc<RwLock<Vec<String>>>,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given project english names.
    #[must_use]
    pub fn with_projects<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Arc::new(RwLock::new(names.into_iter().map(Into::into).collect())),
        }
    }

    /// Adds a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, english_name: impl Into<String>) -> ProjectStoreResult<()> {
        let mut names = self.names.write().map_err(|err| {
            ProjectStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        names.push(english_name.into());
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list_english_names(&self) -> ProjectStoreResult<Vec<String>> {
        let names = self.names.read().map_err(|err| {
            ProjectStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(names.clone())
    }
}
