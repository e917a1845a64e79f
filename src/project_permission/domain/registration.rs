//! Project registration payload.

use super::{ProjectCode, ProjectDomainError};

/// Resource code and display name of a project being registered in IAM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRegistration {
    resource_code: ProjectCode,
    resource_name: String,
}

impl ResourceRegistration {
    /// Creates a validated registration.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] when the code is invalid or the name
    /// is blank.
    pub fn new(
        resource_code: impl Into<String>,
        resource_name: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let code = ProjectCode::new(resource_code)?;
        let name = resource_name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        Ok(Self {
            resource_code: code,
            resource_name: name,
        })
    }

    /// Returns the project code being registered.
    #[must_use]
    pub const fn resource_code(&self) -> &ProjectCode {
        &self.resource_code
    }

    /// Returns the project display name.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }
}
