//! Access-control vocabulary for repository operations.

use super::ComposerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action checked before a repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// Download and query.
    Read,
    /// Upload.
    Write,
}

impl PermissionAction {
    /// Returns the action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of resource a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// An artifact repository.
    Repo,
}

impl ResourceKind {
    /// Returns the resource kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a repository sources its artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryCategory {
    /// Artifacts are uploaded and stored locally.
    Local,
    /// Artifacts are proxied from an upstream repository.
    Remote,
    /// Artifacts are aggregated from member repositories.
    Virtual,
}

impl RepositoryCategory {
    /// Returns the category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Virtual => "virtual",
        }
    }
}

impl fmt::Display for RepositoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated caller of a repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal {
    user_id: String,
}

impl Principal {
    /// Creates a principal for a user.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::EmptyUserId`] when the id is blank.
    pub fn new(user_id: impl Into<String>) -> Result<Self, ComposerDomainError> {
        let raw = user_id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ComposerDomainError::EmptyUserId);
        }
        Ok(Self {
            user_id: trimmed.to_owned(),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
