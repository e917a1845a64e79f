//! Permissions and project role groups.

use super::ParseAuthPermissionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action a user may be granted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPermission {
    /// Create a resource.
    Create,
    /// Modify a resource.
    Edit,
    /// Delete a resource.
    Delete,
    /// View a resource.
    View,
    /// List resources.
    List,
    /// Administer a resource.
    Manage,
}

impl AuthPermission {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::View => "view",
            Self::List => "list",
            Self::Manage => "manage",
        }
    }
}

impl fmt::Display for AuthPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AuthPermission {
    type Error = ParseAuthPermissionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "create" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            "view" => Ok(Self::View),
            "list" => Ok(Self::List),
            "manage" => Ok(Self::Manage),
            _ => Err(ParseAuthPermissionError(value.to_owned())),
        }
    }
}

/// Role group inside a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectGroup {
    /// Project administrators.
    Manager,
    /// Developers.
    Developer,
    /// Maintainers.
    Maintainer,
    /// Testers.
    Tester,
    /// Read-only members.
    Viewer,
}
