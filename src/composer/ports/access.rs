//! Repository lookup and permission ports.

use crate::composer::domain::{PermissionAction, Principal, RepositoryCategory, ResourceKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog and permission lookups.
pub type AccessResult<T> = Result<T, AccessError>;

/// Repository settings relevant to request routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryDetail {
    /// Repository category.
    pub category: RepositoryCategory,
}

/// Repository metadata lookup.
#[async_trait]
pub trait RepositoryCatalog: Send + Sync {
    /// Finds a repository by project and name.
    async fn find(
        &self,
        project_id: &str,
        repo_name: &str,
    ) -> AccessResult<Option<RepositoryDetail>>;
}

/// Permission checks for repository operations.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Returns `true` when the principal may perform `action` on the
    /// repository.
    async fn has_permission(
        &self,
        principal: &Principal,
        kind: ResourceKind,
        action: PermissionAction,
        project_id: &str,
        repo_name: &str,
    ) -> AccessResult<bool>;
}

/// Errors returned by catalog and permission adapters.
#[derive(Debug, Clone, Error)]
pub enum AccessError {
    /// The backing service failed.
    #[error("access lookup failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccessError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
