//! Directory ports for the services owning callback resources.

use crate::iam_callback::domain::records::{
    CertSummary, CredentialSummary, EnvironmentSummary, NodeSummary, PipelineSummary,
    ProjectSummary, RecordPage, RepositorySummary,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Pipeline listing exposed by the process service.
#[async_trait]
pub trait PipelineDirectory: Send + Sync {
    /// Lists one page of pipelines in a project.
    ///
    /// Returns `None` when the service has no data for the project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_pipelines(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<PipelineSummary>>>;
}

/// Code repository listing exposed by the repository service.
#[async_trait]
pub trait RepositoryDirectory: Send + Sync {
    /// Lists one page of repositories across the given projects.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_by_projects(
        &self,
        project_ids: &[String],
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<RepositorySummary>>>;
}

/// Environment and node listing exposed by the environment service.
#[async_trait]
pub trait EnvironmentDirectory: Send + Sync {
    /// Lists one page of environments in a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_environments(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<EnvironmentSummary>>>;

    /// Lists one page of nodes in a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_nodes(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<NodeSummary>>>;
}

/// Credential and certificate listing exposed by the ticket service.
#[async_trait]
pub trait TicketDirectory: Send + Sync {
    /// Lists one page of credentials in a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_credentials(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CredentialSummary>>>;

    /// Lists one page of certificates in a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_certs(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CertSummary>>>;
}

/// Project listing exposed by the project service.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Lists one page of projects.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn list_projects(
        &self,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<ProjectSummary>>>;

    /// Looks up projects by english name. Unknown names are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the service call fails.
    async fn find_by_ids(&self, ids: &[String]) -> DirectoryResult<Option<Vec<ProjectSummary>>>;
}

/// Errors returned by directory adapters.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The service could not be reached.
    #[error("service transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with a failure status.
    #[error("service returned status {code}: {message}")]
    Remote {
        /// Status code reported by the service.
        code: i64,
        /// Message reported by the service.
        message: String,
    },

    /// The service answer could not be decoded.
    #[error("service response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Creates a remote failure from a service status and message.
    pub fn remote(code: i64, message: impl Into<String>) -> Self {
        Self::Remote {
            code,
            message: message.into(),
        }
    }
}
