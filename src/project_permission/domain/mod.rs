//! Domain model for project permission checks.

mod error;
mod permission;
mod project_code;
mod registration;

pub use error::{ParseAuthPermissionError, ProjectDomainError};
pub use permission::{AuthPermission, ProjectGroup};
pub use project_code::ProjectCode;
pub use registration::ResourceRegistration;

/// Service code under which project resources are registered in IAM.
pub const PROJECT_SERVICE_CODE: &str = "project";

/// Entry granting a user every project.
pub const WILDCARD_PROJECT: &str = "*";
