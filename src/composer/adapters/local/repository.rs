//! Local Composer repository over artifact storage.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::metadata::{DistEntry, PackageMetadata, RepositoryIndex, VersionEntry};
use crate::composer::{
    domain::{ArtifactFile, ComposerArtifactInfo},
    ports::{
        ArtifactStorage, ComposerRepository, ComposerRepositoryError, ComposerRepositoryResult,
    },
};

/// Serves uploaded packages from [`ArtifactStorage`].
///
/// Objects are stored under `project/repo/`; dists live below
/// `direct-dists/` and metadata below `p/`.
pub struct LocalComposerRepository<C>
where
    C: Clock + Send + Sync,
{
    storage: Arc<dyn ArtifactStorage>,
    domain: String,
    clock: Arc<C>,
    metadata_lock: Mutex<()>,
}

impl<C> LocalComposerRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a repository publishing URLs below `domain`.
    #[must_use]
    pub fn new(storage: Arc<dyn ArtifactStorage>, domain: &str, clock: Arc<C>) -> Self {
        Self {
            storage,
            domain: domain.trim_end_matches('/').to_owned(),
            clock,
            metadata_lock: Mutex::new(()),
        }
    }

    fn base_url(&self, artifact: &ComposerArtifactInfo) -> String {
        format!(
            "{}/{}/{}",
            self.domain,
            artifact.project_id(),
            artifact.repo_name()
        )
    }

    async fn read_metadata(&self, path: &str) -> ComposerRepositoryResult<Option<String>> {
        self.storage
            .get(path)
            .await?
            .map(String::from_utf8)
            .transpose()
            .map_err(ComposerRepositoryError::metadata)
    }
}

fn storage_path(artifact: &ComposerArtifactInfo, relative: &str) -> String {
    format!(
        "{}/{}/{relative}",
        artifact.project_id(),
        artifact.repo_name()
    )
}

#[async_trait]
impl<C> ComposerRepository for LocalComposerRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn download(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<ArtifactFile>> {
        let coordinates = artifact.dist_coordinates()?;
        let path = storage_path(artifact, &coordinates.dist_path());
        let Some(content) = self.storage.get(&path).await? else {
            debug!(%path, "dist not found");
            return Ok(None);
        };
        Ok(Some(ArtifactFile::new(content)?))
    }

    async fn get_json(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<String>> {
        let name = artifact.package_name()?;
        self.read_metadata(&storage_path(artifact, &name.metadata_path()))
            .await
    }

    async fn packages(
        &self,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerRepositoryResult<Option<String>> {
        let index = RepositoryIndex::new(&self.base_url(artifact));
        let document = serde_json::to_string(&index).map_err(ComposerRepositoryError::metadata)?;
        Ok(Some(document))
    }

    async fn upload(
        &self,
        artifact: &ComposerArtifactInfo,
        file: ArtifactFile,
    ) -> ComposerRepositoryResult<()> {
        let coordinates = artifact.dist_coordinates()?;
        let dist_path = coordinates.dist_path();
        let entry = VersionEntry {
            name: coordinates.name().to_string(),
            version: coordinates.version().to_owned(),
            dist: DistEntry {
                kind: coordinates.extension().dist_type().to_owned(),
                url: format!("{}/{dist_path}", self.base_url(artifact)),
                sha256: file.sha256().to_owned(),
            },
            time: self.clock.utc(),
        };
        let size = file.len();
        self.storage
            .put(&storage_path(artifact, &dist_path), file.into_content())
            .await?;

        let metadata_path = storage_path(artifact, &coordinates.name().metadata_path());
        let _guard = self.metadata_lock.lock().await;
        let mut metadata = self
            .read_metadata(&metadata_path)
            .await?
            .map(|document| serde_json::from_str::<PackageMetadata>(&document))
            .transpose()
            .map_err(ComposerRepositoryError::metadata)?
            .unwrap_or_default();
        metadata.insert(entry);
        let document =
            serde_json::to_vec(&metadata).map_err(ComposerRepositoryError::metadata)?;
        self.storage.put(&metadata_path, document).await?;
        info!(
            project_id = artifact.project_id(),
            repo_name = artifact.repo_name(),
            package = %coordinates.name(),
            version = coordinates.version(),
            size,
            "stored composer dist"
        );
        Ok(())
    }
}
