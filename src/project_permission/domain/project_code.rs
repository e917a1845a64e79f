//! Validated project code type.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a project code, matching the `VARCHAR(64)` column.
const MAX_CODE_LENGTH: usize = 64;

/// Project english name, the stable identifier of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCode(String);

impl ProjectCode {
    /// Creates a validated project code.
    ///
    /// The input is trimmed. It must start with a lowercase letter and
    /// contain only characters in `[a-z0-9_-]`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectCode`] when the value is
    /// empty after trimming, [`ProjectDomainError::ProjectCodeTooLong`] when
    /// it exceeds 64 characters, or
    /// [`ProjectDomainError::InvalidProjectCode`] when it violates the
    /// character rules.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyProjectCode);
        }

        if trimmed.len() > MAX_CODE_LENGTH {
            return Err(ProjectDomainError::ProjectCodeTooLong(raw));
        }

        let starts_with_letter = trimmed.starts_with(|c: char| c.is_ascii_lowercase());
        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !starts_with_letter || !is_valid {
            return Err(ProjectDomainError::InvalidProjectCode(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the project code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
