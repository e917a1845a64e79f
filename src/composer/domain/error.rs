//! Error types for Composer domain validation.

use thiserror::Error;

/// Errors returned while constructing Composer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposerDomainError {
    /// The project identifier is empty after trimming.
    #[error("project id must not be empty")]
    EmptyProjectId,

    /// The repository name is empty after trimming.
    #[error("repository name must not be empty")]
    EmptyRepoName,

    /// The project identifier is not a single path segment.
    #[error("project id '{0}' may only contain letters, digits, '.', '_', '-' and '+'")]
    InvalidProjectId(String),

    /// The repository name is not a single path segment.
    #[error("repository name '{0}' may only contain letters, digits, '.', '_', '-' and '+'")]
    InvalidRepoName(String),

    /// The user identifier is empty after trimming.
    #[error("user id must not be empty")]
    EmptyUserId,

    /// The path does not address a dist archive.
    #[error("'{0}' is not a dist path of the form /vendor/package/version.(zip|tar|tgz|tar.gz)")]
    InvalidDistPath(String),

    /// The path does not address a package metadata document.
    #[error("'{0}' is not a metadata path of the form /p/vendor/package.json")]
    InvalidMetadataPath(String),

    /// The uploaded artifact has no content.
    #[error("artifact file is empty")]
    EmptyArtifact,
}
