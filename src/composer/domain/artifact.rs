//! Artifact addressing for Composer requests.

use super::{ComposerDomainError, PackageCoordinates, PackageName, coordinates::is_segment};

/// Repository and path addressed by a Composer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerArtifactInfo {
    project_id: String,
    repo_name: String,
    artifact_uri: String,
}

impl ComposerArtifactInfo {
    /// Creates validated artifact info.
    ///
    /// The project and repository are trimmed and must each be a single
    /// path segment, since together they prefix every storage key. The URI
    /// is trimmed and given a leading `/` when it lacks one.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::EmptyProjectId`] or
    /// [`ComposerDomainError::EmptyRepoName`] when either is blank, and
    /// [`ComposerDomainError::InvalidProjectId`] or
    /// [`ComposerDomainError::InvalidRepoName`] when either is not a single
    /// segment.
    pub fn new(
        project_id: impl Into<String>,
        repo_name: impl Into<String>,
        artifact_uri: impl Into<String>,
    ) -> Result<Self, ComposerDomainError> {
        let project = project_id.into().trim().to_owned();
        if project.is_empty() {
            return Err(ComposerDomainError::EmptyProjectId);
        }
        if !is_segment(&project) {
            return Err(ComposerDomainError::InvalidProjectId(project));
        }
        let repo = repo_name.into().trim().to_owned();
        if repo.is_empty() {
            return Err(ComposerDomainError::EmptyRepoName);
        }
        if !is_segment(&repo) {
            return Err(ComposerDomainError::InvalidRepoName(repo));
        }
        let uri = artifact_uri.into();
        let trimmed = uri.trim();
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_owned()
        } else {
            format!("/{trimmed}")
        };
        Ok(Self {
            project_id: project,
            repo_name: repo,
            artifact_uri: normalized,
        })
    }

    /// Returns the owning project.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Returns the request path inside the repository, always starting
    /// with `/`.
    #[must_use]
    pub fn artifact_uri(&self) -> &str {
        &self.artifact_uri
    }

    /// Parses the URI as a dist archive path.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::InvalidDistPath`] when it is not one.
    pub fn dist_coordinates(&self) -> Result<PackageCoordinates, ComposerDomainError> {
        PackageCoordinates::from_dist_path(&self.artifact_uri)
    }

    /// Parses the URI as a package metadata path.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::InvalidMetadataPath`] when it is not
    /// one.
    pub fn package_name(&self) -> Result<PackageName, ComposerDomainError> {
        PackageName::from_metadata_path(&self.artifact_uri)
    }
}
