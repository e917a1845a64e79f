//! Service layer answering IAM instance callbacks.
//!
//! Provides [`ResourceCallbackService`] which verifies the callback token,
//! routes a callback to the platform service owning the resource kind and
//! reshapes the records into IAM response envelopes.

use crate::iam_callback::{
    domain::{
        CallbackMethod, CallbackRequest, CallbackResponse, DEFAULT_PAGE_LIMIT,
        FetchInstanceInfoResponse, InstanceInfo, ListInstanceResponse, PageInfo,
        ParseResourceTypeError, ResourceType,
        records::{InstanceRecord, RecordPage},
    },
    ports::{
        CallbackTokenVerifier, DirectoryError, EnvironmentDirectory, PipelineDirectory,
        ProjectDirectory, RepositoryDirectory, TicketDirectory,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Message code reported when a callback token is rejected.
pub const TOKEN_TICKET_FAIL: &str = "2121005";

/// Service-level errors for callback resolution.
#[derive(Debug, Error)]
pub enum ResourceCallbackError {
    /// The callback token was rejected.
    #[error("[{code}] callback token verification failed", code = TOKEN_TICKET_FAIL)]
    InvalidToken,

    /// The action does not address a known resource type.
    #[error("resource type '{resource_type}' derived from action '{action}' does not exist")]
    UnknownResourceType {
        /// Action received from the authorization system.
        action: String,
        /// Resource type name derived from the action.
        resource_type: String,
        /// Underlying parse failure.
        #[source]
        source: ParseResourceTypeError,
    },

    /// A resource callback was not scoped to a parent project.
    #[error("callback for resource type '{0}' is missing its parent project")]
    MissingParentProject(String),

    /// A downstream service call failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ResourceCallbackError {
    /// Returns the message code shown to the authorization system, if the
    /// error carries one.
    #[must_use]
    pub const fn message_code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidToken => Some(TOKEN_TICKET_FAIL),
            Self::UnknownResourceType { .. }
            | Self::MissingParentProject(_)
            | Self::Directory(_) => None,
        }
    }
}

/// Result type for callback service operations.
pub type ResourceCallbackResult<T> = Result<T, ResourceCallbackError>;

/// Platform directories consulted by the resource list callback.
#[derive(Clone)]
pub struct ResourceDirectories {
    /// Process service.
    pub pipelines: Arc<dyn PipelineDirectory>,
    /// Code repository service.
    pub repositories: Arc<dyn RepositoryDirectory>,
    /// Environment service.
    pub environments: Arc<dyn EnvironmentDirectory>,
    /// Ticket service.
    pub tickets: Arc<dyn TicketDirectory>,
    /// Project service.
    pub projects: Arc<dyn ProjectDirectory>,
}

impl ResourceDirectories {
    /// Uses one adapter for every directory.
    #[must_use]
    pub fn shared<D>(directory: Arc<D>) -> Self
    where
        D: PipelineDirectory
            + RepositoryDirectory
            + EnvironmentDirectory
            + TicketDirectory
            + ProjectDirectory
            + 'static,
    {
        Self {
            pipelines: directory.clone(),
            repositories: directory.clone(),
            environments: directory.clone(),
            tickets: directory.clone(),
            projects: directory,
        }
    }
}

/// IAM instance callback orchestration service.
#[derive(Clone)]
pub struct ResourceCallbackService {
    directories: ResourceDirectories,
    verifier: Arc<dyn CallbackTokenVerifier>,
    default_page_limit: u64,
}

impl ResourceCallbackService {
    /// Creates a new callback service using the standard page size.
    #[must_use]
    pub fn new(directories: ResourceDirectories, verifier: Arc<dyn CallbackTokenVerifier>) -> Self {
        Self {
            directories,
            verifier,
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Overrides the page size used when a callback omits its page.
    #[must_use]
    pub const fn with_default_page_limit(mut self, limit: u64) -> Self {
        self.default_page_limit = limit;
        self
    }

    /// Answers a project callback.
    ///
    /// `fetch_instance_info` returns the projects named in the filter id
    /// list; every other method returns one page of all projects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCallbackError::InvalidToken`] when the token is
    /// rejected or [`ResourceCallbackError::Directory`] when the project
    /// service fails.
    pub async fn project_callback(
        &self,
        request: &CallbackRequest,
        token: &str,
    ) -> ResourceCallbackResult<CallbackResponse> {
        info!(method = %request.method, page = ?request.page, "project callback");
        self.check_token(token).await?;
        if request.method == CallbackMethod::FetchInstanceInfo {
            let ids = request.filter.ids();
            let response = self
                .fetch_projects(&ids, &request.filter.attribute_list)
                .await?;
            return Ok(response.into());
        }
        let page = PageInfo::resolve(request.page, self.default_page_limit);
        Ok(self.list_projects(page).await?.into())
    }

    /// Answers a resource list callback for a project.
    ///
    /// The resource type is derived from `action_type`. Known resource types
    /// without a list handler yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCallbackError::InvalidToken`] when the token is
    /// rejected, [`ResourceCallbackError::UnknownResourceType`] when the
    /// action names no known resource type, or
    /// [`ResourceCallbackError::Directory`] when the owning service fails.
    pub async fn list_resources(
        &self,
        project_id: &str,
        action_type: &str,
        method: CallbackMethod,
        requested_page: Option<PageInfo>,
        token: &str,
    ) -> ResourceCallbackResult<Option<ListInstanceResponse>> {
        info!(project_id, action_type, %method, page = ?requested_page, "resource list callback");
        self.check_token(token).await?;
        let page = PageInfo::resolve(requested_page, self.default_page_limit);
        let resource_type = resolve_resource_type(action_type)?;
        self.list_of_type(project_id, resource_type, page).await
    }

    /// Answers a complete callback body.
    ///
    /// Project callbacks go to [`Self::project_callback`]; any other type is
    /// listed inside the project named by `filter.parent`. The `type` field
    /// may hold a resource type name or an action identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCallbackError::MissingParentProject`] when a
    /// non-project callback has no parent, plus every error of the delegated
    /// operation.
    pub async fn resource_callback(
        &self,
        request: &CallbackRequest,
        token: &str,
    ) -> ResourceCallbackResult<Option<CallbackResponse>> {
        let known = ResourceType::try_from(request.resource_type.as_str())
            .or_else(|_| ResourceType::from_action(&request.resource_type))
            .ok();
        if known == Some(ResourceType::Project) {
            return self.project_callback(request, token).await.map(Some);
        }
        info!(resource_type = %request.resource_type, method = %request.method, "resource callback");
        self.check_token(token).await?;
        let resource_type =
            known.map_or_else(|| resolve_resource_type(&request.resource_type), Ok)?;
        let project_id = request.filter.parent_id().ok_or_else(|| {
            ResourceCallbackError::MissingParentProject(request.resource_type.clone())
        })?;
        let page = PageInfo::resolve(request.page, self.default_page_limit);
        let response = self.list_of_type(project_id, resource_type, page).await?;
        Ok(response.map(CallbackResponse::from))
    }

    async fn list_of_type(
        &self,
        project_id: &str,
        resource_type: ResourceType,
        page: PageInfo,
    ) -> ResourceCallbackResult<Option<ListInstanceResponse>> {
        let PageInfo { offset, limit } = page;
        let response = match resource_type {
            ResourceType::Pipeline => {
                let records = self
                    .directories
                    .pipelines
                    .list_pipelines(project_id, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::CodeRepository => {
                let projects = [project_id.to_owned()];
                let records = self
                    .directories
                    .repositories
                    .list_by_projects(&projects, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::Environment => {
                let records = self
                    .directories
                    .environments
                    .list_environments(project_id, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::EnvNode => {
                let records = self
                    .directories
                    .environments
                    .list_nodes(project_id, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::Credential => {
                let records = self
                    .directories
                    .tickets
                    .list_credentials(project_id, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::Cert => {
                let records = self
                    .directories
                    .tickets
                    .list_certs(project_id, offset, limit)
                    .await?;
                reshape(project_id, resource_type, records)
            }
            ResourceType::Project
            | ResourceType::QualityRule
            | ResourceType::QualityGroup
            | ResourceType::ExperienceTask
            | ResourceType::ExperienceGroup
            | ResourceType::DevImage
            | ResourceType::ProdImage => return Ok(None),
        };
        Ok(Some(response))
    }

    async fn check_token(&self, token: &str) -> ResourceCallbackResult<()> {
        if self.verifier.verify(token).await? {
            return Ok(());
        }
        warn!("callback token verification failed");
        Err(ResourceCallbackError::InvalidToken)
    }

    async fn list_projects(&self, page: PageInfo) -> ResourceCallbackResult<ListInstanceResponse> {
        let records = self
            .directories
            .projects
            .list_projects(page.offset, page.limit)
            .await?;
        let count = records.as_ref().map_or(0, |found| found.count);
        let result = records
            .and_then(|found| found.records)
            .unwrap_or_default()
            .into_iter()
            .map(InstanceRecord::into_instance)
            .collect::<Vec<_>>();
        info!(count, listed = result.len(), "listed projects");
        Ok(ListInstanceResponse::success(count, result))
    }

    async fn fetch_projects(
        &self,
        ids: &[String],
        attributes: &[String],
    ) -> ResourceCallbackResult<FetchInstanceInfoResponse> {
        info!(?ids, ?attributes, "fetching project instances");
        let projects = self
            .directories
            .projects
            .find_by_ids(ids)
            .await?
            .unwrap_or_default();
        let data: Vec<InstanceInfo> = projects
            .into_iter()
            .map(InstanceRecord::into_instance)
            .collect();
        Ok(FetchInstanceInfoResponse::success(data))
    }
}

fn resolve_resource_type(action_type: &str) -> ResourceCallbackResult<ResourceType> {
    ResourceType::from_action(action_type).map_err(|source| {
        let resource_type = ResourceType::type_name_from_action(action_type).to_owned();
        warn!(action_type, %resource_type, "callback action names an unknown resource type");
        ResourceCallbackError::UnknownResourceType {
            action: action_type.to_owned(),
            resource_type,
            source,
        }
    })
}

fn reshape<T: InstanceRecord>(
    project_id: &str,
    resource_type: ResourceType,
    page: Option<RecordPage<T>>,
) -> ListInstanceResponse {
    let Some(RecordPage {
        count,
        records: Some(records),
    }) = page
    else {
        info!(project_id, %resource_type, "project has no instances");
        return ListInstanceResponse::empty();
    };
    let result: Vec<InstanceInfo> = records
        .into_iter()
        .map(InstanceRecord::into_instance)
        .collect();
    info!(project_id, %resource_type, count, listed = result.len(), "listed instances");
    ListInstanceResponse::success(count, result)
}
