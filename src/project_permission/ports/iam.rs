//! IAM ports used by project permission checks.

use crate::iam_callback::domain::ResourceType;
use crate::project_permission::domain::{AuthPermission, ProjectGroup};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for IAM operations.
pub type IamResult<T> = Result<T, IamError>;

/// Project membership queries.
#[async_trait]
pub trait AuthProjectApi: Send + Sync {
    /// Returns `true` when the user belongs to the project, optionally
    /// restricted to one role group.
    async fn is_project_user(
        &self,
        user_id: &str,
        service_code: &str,
        project_code: &str,
        group: Option<ProjectGroup>,
    ) -> IamResult<bool>;

    /// Returns the project codes visible to the user.
    ///
    /// A leading [`crate::project_permission::domain::WILDCARD_PROJECT`]
    /// entry grants every project.
    async fn get_user_projects(&self, service_code: &str, user_id: &str)
    -> IamResult<Vec<String>>;

    /// Returns the projects the user can use, keyed by project code with the
    /// display name as value.
    async fn get_user_projects_available(
        &self,
        service_code: &str,
        user_id: &str,
    ) -> IamResult<BTreeMap<String, String>>;
}

/// Resource permission checks.
#[async_trait]
pub trait AuthPermissionApi: Send + Sync {
    /// Returns `true` when the user holds `permission` on resources of
    /// `resource_type` inside `project_code`.
    ///
    /// An empty `project_code` asks about the platform scope, used for
    /// project creation.
    async fn validate_user_resource_permission(
        &self,
        user_id: &str,
        service_code: &str,
        resource_type: ResourceType,
        project_code: &str,
        permission: AuthPermission,
    ) -> IamResult<bool>;
}

/// Resource registration in IAM.
#[async_trait]
pub trait AuthResourceApi: Send + Sync {
    /// Registers a resource created by `user_id`.
    async fn create_resource(
        &self,
        user_id: &str,
        service_code: &str,
        resource_type: ResourceType,
        project_code: &str,
        resource_code: &str,
        resource_name: &str,
    ) -> IamResult<()>;

    /// Renames a registered resource.
    async fn modify_resource(
        &self,
        service_code: &str,
        resource_type: ResourceType,
        project_code: &str,
        resource_code: &str,
        resource_name: &str,
    ) -> IamResult<()>;
}

/// Errors returned by IAM adapters.
#[derive(Debug, Clone, Error)]
pub enum IamError {
    /// The resource is already registered.
    #[error("resource {resource_type}/{resource_code} is already registered")]
    DuplicateResource {
        /// Resource type.
        resource_type: ResourceType,
        /// Resource code.
        resource_code: String,
    },

    /// The resource is not registered.
    #[error("resource {resource_type}/{resource_code} is not registered")]
    ResourceNotFound {
        /// Resource type.
        resource_type: ResourceType,
        /// Resource code.
        resource_code: String,
    },

    /// The IAM system could not be reached or failed.
    #[error("IAM request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IamError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
