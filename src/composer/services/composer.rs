//! Permission-checked routing of Composer requests.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::composer::{
    domain::{
        ArtifactFile, ComposerArtifactInfo, PermissionAction, Principal, RepositoryCategory,
        ResourceKind,
    },
    ports::{
        AccessError, ComposerRepository, ComposerRepositoryError, PermissionChecker,
        RepositoryCatalog,
    },
};

/// Service-level errors for Composer operations.
#[derive(Debug, Error)]
pub enum ComposerServiceError {
    /// The caller lacks the permission the operation requires.
    #[error("user '{user_id}' lacks {action} permission on repository {project_id}/{repo_name}")]
    PermissionDenied {
        /// Caller.
        user_id: String,
        /// Required action.
        action: PermissionAction,
        /// Repository project.
        project_id: String,
        /// Repository name.
        repo_name: String,
    },

    /// The repository does not exist.
    #[error("repository {project_id}/{repo_name} not found")]
    RepositoryNotFound {
        /// Repository project.
        project_id: String,
        /// Repository name.
        repo_name: String,
    },

    /// No implementation is registered for the repository category.
    #[error("no composer repository registered for category '{0}'")]
    UnsupportedCategory(RepositoryCategory),

    /// Catalog or permission lookup failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The repository implementation failed.
    #[error(transparent)]
    Repository(#[from] ComposerRepositoryError),
}

/// Result type for Composer service operations.
pub type ComposerServiceResult<T> = Result<T, ComposerServiceError>;

/// Routes Composer requests to the implementation for each repository
/// category after checking the caller's permission.
#[derive(Clone)]
pub struct ComposerService {
    catalog: Arc<dyn RepositoryCatalog>,
    permissions: Arc<dyn PermissionChecker>,
    repositories: HashMap<RepositoryCategory, Arc<dyn ComposerRepository>>,
}

impl ComposerService {
    /// Creates a service with no registered implementations.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn RepositoryCatalog>,
        permissions: Arc<dyn PermissionChecker>,
    ) -> Self {
        Self {
            catalog,
            permissions,
            repositories: HashMap::new(),
        }
    }

    /// Registers the implementation serving `category`.
    #[must_use]
    pub fn with_repository(
        mut self,
        category: RepositoryCategory,
        repository: Arc<dyn ComposerRepository>,
    ) -> Self {
        self.repositories.insert(category, repository);
        self
    }

    /// Returns the dist archive addressed by `artifact`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerServiceError`] when the caller may not read the
    /// repository, the repository is unknown or unsupported, or the
    /// download fails.
    pub async fn install_require(
        &self,
        principal: &Principal,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerServiceResult<Option<ArtifactFile>> {
        let repository = self
            .authorize(principal, artifact, PermissionAction::Read)
            .await?;
        let file = repository.download(artifact).await?;
        debug!(
            uri = artifact.artifact_uri(),
            found = file.is_some(),
            "composer dist requested"
        );
        Ok(file)
    }

    /// Returns the package metadata addressed by `artifact`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerServiceError`] as for
    /// [`Self::install_require`].
    pub async fn get_json(
        &self,
        principal: &Principal,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerServiceResult<Option<String>> {
        let repository = self
            .authorize(principal, artifact, PermissionAction::Read)
            .await?;
        Ok(repository.get_json(artifact).await?)
    }

    /// Returns the repository index.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerServiceError`] as for
    /// [`Self::install_require`].
    pub async fn packages(
        &self,
        principal: &Principal,
        artifact: &ComposerArtifactInfo,
    ) -> ComposerServiceResult<Option<String>> {
        let repository = self
            .authorize(principal, artifact, PermissionAction::Read)
            .await?;
        Ok(repository.packages(artifact).await?)
    }

    /// Uploads a dist archive.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerServiceError`] when the caller may not write to
    /// the repository, the repository is unknown or unsupported, or the
    /// upload fails.
    pub async fn deploy(
        &self,
        principal: &Principal,
        artifact: &ComposerArtifactInfo,
        file: ArtifactFile,
    ) -> ComposerServiceResult<()> {
        let repository = self
            .authorize(principal, artifact, PermissionAction::Write)
            .await?;
        repository.upload(artifact, file).await?;
        info!(
            user_id = principal.user_id(),
            uri = artifact.artifact_uri(),
            "composer artifact deployed"
        );
        Ok(())
    }

    async fn authorize(
        &self,
        principal: &Principal,
        artifact: &ComposerArtifactInfo,
        action: PermissionAction,
    ) -> ComposerServiceResult<&Arc<dyn ComposerRepository>> {
        let project_id = artifact.project_id();
        let repo_name = artifact.repo_name();
        let allowed = self
            .permissions
            .has_permission(principal, ResourceKind::Repo, action, project_id, repo_name)
            .await?;
        if !allowed {
            warn!(
                user_id = principal.user_id(),
                %action,
                project_id,
                repo_name,
                "composer permission denied"
            );
            return Err(ComposerServiceError::PermissionDenied {
                user_id: principal.user_id().to_owned(),
                action,
                project_id: project_id.to_owned(),
                repo_name: repo_name.to_owned(),
            });
        }
        let detail = self
            .catalog
            .find(project_id, repo_name)
            .await?
            .ok_or_else(|| ComposerServiceError::RepositoryNotFound {
                project_id: project_id.to_owned(),
                repo_name: repo_name.to_owned(),
            })?;
        self.repositories
            .get(&detail.category)
            .ok_or(ComposerServiceError::UnsupportedCategory(detail.category))
    }
}
