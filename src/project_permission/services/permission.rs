//! Permission-guarded project operations.

use crate::iam_callback::domain::ResourceType;
use crate::project_permission::{
    domain::{
        AuthPermission, PROJECT_SERVICE_CODE, ProjectCode, ProjectDomainError,
        ResourceRegistration, WILDCARD_PROJECT,
    },
    ports::{
        AuthPermissionApi, AuthProjectApi, AuthResourceApi, IamError, ProjectStore,
        ProjectStoreError,
    },
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for project permission checks.
#[derive(Debug, Error)]
pub enum ProjectPermissionError {
    /// The user lacks the permission required for the operation.
    #[error("user '{user_id}' lacks '{permission}' permission on project '{project_code}'")]
    PermissionDenied {
        /// User that attempted the operation.
        user_id: String,
        /// Permission that was required.
        permission: AuthPermission,
        /// Project scope of the check, empty for the platform scope.
        project_code: String,
    },
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The IAM system rejected or failed the request.
    #[error(transparent)]
    Iam(#[from] IamError),
    /// The project store failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

/// Result type for project permission service operations.
pub type ProjectPermissionResult<T> = Result<T, ProjectPermissionError>;

/// Wraps project lifecycle operations in IAM permission checks.
#[derive(Clone)]
pub struct ProjectPermissionService {
    projects: Arc<dyn AuthProjectApi>,
    permissions: Arc<dyn AuthPermissionApi>,
    resources: Arc<dyn AuthResourceApi>,
    store: Arc<dyn ProjectStore>,
    service_code: String,
}

impl ProjectPermissionService {
    /// Creates a service registering projects under
    /// [`PROJECT_SERVICE_CODE`].
    #[must_use]
    pub fn new(
        projects: Arc<dyn AuthProjectApi>,
        permissions: Arc<dyn AuthPermissionApi>,
        resources: Arc<dyn AuthResourceApi>,
        store: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            projects,
            permissions,
            resources,
            store,
            service_code: PROJECT_SERVICE_CODE.to_owned(),
        }
    }

    /// Overrides the IAM service code.
    #[must_use]
    pub fn with_service_code(mut self, service_code: impl Into<String>) -> Self {
        self.service_code = service_code.into();
        self
    }

    /// Returns `true` when the user is a member of the project in any role.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::Iam`] when the membership lookup
    /// fails.
    pub async fn verify_user_project_permission(
        &self,
        access_token: Option<&str>,
        project_code: &str,
        user_id: &str,
    ) -> ProjectPermissionResult<bool> {
        debug!(
            user_id,
            project_code,
            has_access_token = access_token.is_some(),
            "checking project membership"
        );
        Ok(self
            .projects
            .is_project_user(user_id, &self.service_code, project_code, None)
            .await?)
    }

    /// Registers a new project in IAM on behalf of `user_id`.
    ///
    /// The user needs the platform-wide `create` permission on projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::PermissionDenied`] when the user
    /// may not create projects, or [`ProjectPermissionError::Iam`] when IAM
    /// rejects the registration.
    pub async fn create_resources(
        &self,
        user_id: &str,
        access_token: Option<&str>,
        registration: &ResourceRegistration,
    ) -> ProjectPermissionResult<()> {
        self.require(user_id, "", AuthPermission::Create).await?;
        let code = registration.resource_code().as_str();
        self.resources
            .create_resource(
                user_id,
                &self.service_code,
                ResourceType::Project,
                code,
                code,
                registration.resource_name(),
            )
            .await?;
        info!(
            user_id,
            project_code = code,
            has_access_token = access_token.is_some(),
            "registered project in IAM"
        );
        Ok(())
    }

    /// Renames a project in IAM.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::Domain`] when the code or name is
    /// invalid, [`ProjectPermissionError::PermissionDenied`] when the user
    /// may not edit the project, or [`ProjectPermissionError::Iam`] when
    /// IAM fails.
    pub async fn modify_resource(
        &self,
        user_id: &str,
        project_code: &str,
        project_name: &str,
    ) -> ProjectPermissionResult<()> {
        let registration = ResourceRegistration::new(project_code, project_name)?;
        let code = registration.resource_code().as_str();
        self.require(user_id, code, AuthPermission::Edit).await?;
        self.resources
            .modify_resource(
                &self.service_code,
                ResourceType::Project,
                code,
                code,
                registration.resource_name(),
            )
            .await?;
        info!(user_id, project_code = code, "renamed project in IAM");
        Ok(())
    }

    /// Accepts a project deletion without touching IAM.
    ///
    /// Project resources stay registered so their audit trail survives.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::Domain`] when the code is invalid.
    pub fn delete_resource(&self, project_code: &str) -> ProjectPermissionResult<()> {
        let code = ProjectCode::new(project_code)?;
        info!(project_code = %code, "project deletion accepted, IAM resource retained");
        Ok(())
    }

    /// Returns the codes of the projects visible to the user.
    ///
    /// A wildcard grant expands to every project in the store.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::Iam`] or
    /// [`ProjectPermissionError::Store`] when a lookup fails.
    pub async fn get_user_projects(&self, user_id: &str) -> ProjectPermissionResult<Vec<String>> {
        let projects = self
            .projects
            .get_user_projects(&self.service_code, user_id)
            .await?;
        match projects.first().map(|code| code.trim()) {
            None => Ok(Vec::new()),
            Some(WILDCARD_PROJECT) => {
                debug!(user_id, "user holds every project");
                Ok(self.store.list_english_names().await?)
            }
            Some(_) => Ok(projects
                .iter()
                .map(|code| code.trim().to_owned())
                .collect()),
        }
    }

    /// Returns the projects the user can use, keyed by code.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPermissionError::Iam`] when the lookup fails.
    pub async fn get_user_projects_available(
        &self,
        user_id: &str,
    ) -> ProjectPermissionResult<BTreeMap<String, String>> {
        Ok(self
            .projects
            .get_user_projects_available(&self.service_code, user_id)
            .await?)
    }

    async fn require(
        &self,
        user_id: &str,
        project_code: &str,
        permission: AuthPermission,
    ) -> ProjectPermissionResult<()> {
        let allowed = self
            .permissions
            .validate_user_resource_permission(
                user_id,
                &self.service_code,
                ResourceType::Project,
                project_code,
                permission,
            )
            .await?;
        if allowed {
            return Ok(());
        }
        warn!(user_id, project_code, %permission, "project permission denied");
        Err(ProjectPermissionError::PermissionDenied {
            user_id: user_id.to_owned(),
            permission,
            project_code: project_code.to_owned(),
        })
    }
}
