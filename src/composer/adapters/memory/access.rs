//! In-memory repository catalog and permission grants.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::composer::{
    domain::{PermissionAction, Principal, RepositoryCategory, ResourceKind},
    ports::{AccessError, AccessResult, PermissionChecker, RepositoryCatalog, RepositoryDetail},
};

/// Thread-safe in-memory repository catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryCatalog {
    repositories: Arc<RwLock<HashMap<(String, String), RepositoryDetail>>>,
}

impl InMemoryRepositoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a repository.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Transport`] when the lock is poisoned.
    pub fn register(
        &self,
        project_id: &str,
        repo_name: &str,
        category: RepositoryCategory,
    ) -> AccessResult<()> {
        let mut repositories = self
            .repositories
            .write()
            .map_err(|err| AccessError::transport(std::io::Error::other(err.to_string())))?;
        repositories.insert(
            (project_id.to_owned(), repo_name.to_owned()),
            RepositoryDetail { category },
        );
        Ok(())
    }
}

#[async_trait]
impl RepositoryCatalog for InMemoryRepositoryCatalog {
    async fn find(
        &self,
        project_id: &str,
        repo_name: &str,
    ) -> AccessResult<Option<RepositoryDetail>> {
        let repositories = self
            .repositories
            .read()
            .map_err(|err| AccessError::transport(std::io::Error::other(err.to_string())))?;
        Ok(repositories
            .get(&(project_id.to_owned(), repo_name.to_owned()))
            .copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Grant {
    user_id: String,
    kind: ResourceKind,
    action: PermissionAction,
    project_id: String,
    repo_name: String,
}

/// Thread-safe in-memory permission grants.
///
/// A write grant implies read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPermissionChecker {
    grants: Arc<RwLock<HashSet<Grant>>>,
}

impl InMemoryPermissionChecker {
    /// Creates a checker with no grants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `action` on a repository to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Transport`] when the lock is poisoned.
    pub fn grant(
        &self,
        user_id: &str,
        action: PermissionAction,
        project_id: &str,
        repo_name: &str,
    ) -> AccessResult<()> {
        let mut grants = self
            .grants
            .write()
            .map_err(|err| AccessError::transport(std::io::Error::other(err.to_string())))?;
        grants.insert(Grant {
            user_id: user_id.to_owned(),
            kind: ResourceKind::Repo,
            action,
            project_id: project_id.to_owned(),
            repo_name: repo_name.to_owned(),
        });
        Ok(())
    }
}

#[async_trait]
impl PermissionChecker for InMemoryPermissionChecker {
    async fn has_permission(
        &self,
        principal: &Principal,
        kind: ResourceKind,
        action: PermissionAction,
        project_id: &str,
        repo_name: &str,
    ) -> AccessResult<bool> {
        let grants = self
            .grants
            .read()
            .map_err(|err| AccessError::transport(std::io::Error::other(err.to_string())))?;
        let holds = |granted: PermissionAction| {
            grants.contains(&Grant {
                user_id: principal.user_id().to_owned(),
                kind,
                action: granted,
                project_id: project_id.to_owned(),
                repo_name: repo_name.to_owned(),
            })
        };
        Ok(holds(action) || (action == PermissionAction::Read && holds(PermissionAction::Write)))
    }
}
