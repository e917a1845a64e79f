//! Composer repository port.

use crate::composer::domain::{ArtifactFile, ComposerArtifactInfo, ComposerDomainError};
use crate::composer::ports::StorageError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for Composer repository operations.
pub type ComposerRepositoryResult<T> = Result<T, ComposerRepositoryError>;

/// Composer semantics for one repository category.
#[async_trait]
pub trait ComposerRepository: Send + Sync {
    /// Returns the dist archive addressed by the artifact URI.
    async fn download(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<ArtifactFile>>;

    /// Returns the metadata document addressed by the artifact URI.
    async fn get_json(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<String>>;

    /// Returns the repository index document.
    async fn packages(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<String>>;

    /// Stores an uploaded dist archive and records its version.
    async fn upload(
        &self,
        artifact: &ComposerArtifactInfo,
        file: ArtifactFile,
    ) -> ComposerRepositoryResult<()>;
}

/// Errors returned by Composer repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ComposerRepositoryError {
    /// The artifact URI does not fit the operation.
    #[error(transparent)]
    Domain(#[from] ComposerDomainError),

    /// Storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A stored metadata document could not be read or written.
    #[error("package metadata is malformed: {0}")]
    Metadata(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComposerRepositoryError {
    /// Wraps a metadata encoding error.
    pub fn metadata(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Metadata(Arc::new(err))
    }
}
