//! Error types for project permission domain validation.

use thiserror::Error;

/// Errors returned while constructing project permission domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project code is empty after trimming.
    #[error("project code must not be empty")]
    EmptyProjectCode,

    /// The project code contains characters outside `[a-z0-9_-]` or does
    /// not start with a letter.
    #[error(
        "project code '{0}' is invalid (must start with a lowercase letter and contain only lowercase alphanumerics, '-' or '_')"
    )]
    InvalidProjectCode(String),

    /// The project code exceeds the 64-character storage limit.
    #[error("project code exceeds 64 character limit: {0}")]
    ProjectCodeTooLong(String),

    /// The project display name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,
}

/// Error returned while parsing a permission name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown auth permission: {0}")]
pub struct ParseAuthPermissionError(pub String);
