//! `reqwest` client implementing every directory port.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::ServiceEnvelope;
use crate::iam_callback::{
    domain::records::{
        CertSummary, CredentialSummary, EnvironmentSummary, NodeSummary, PipelineSummary,
        ProjectSummary, RecordPage, RepositorySummary,
    },
    ports::{
        CallbackTokenVerifier, DirectoryError, DirectoryResult, EnvironmentDirectory,
        PipelineDirectory, ProjectDirectory, RepositoryDirectory, TicketDirectory,
    },
};

/// Header carrying the callback token to the auth service.
const CALLBACK_TOKEN_HEADER: &str = "X-Callback-Token";

/// Base URLs of the platform services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Process (pipeline) service.
    pub process: String,
    /// Code repository service.
    pub repository: String,
    /// Environment and node service.
    pub environment: String,
    /// Ticket (credential and certificate) service.
    pub ticket: String,
    /// Project service.
    pub project: String,
    /// Auth service verifying callback tokens.
    pub auth: String,
}

/// HTTP client for the platform service APIs.
#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    client: Client,
    endpoints: ServiceEndpoints,
}

impl HttpServiceClient {
    /// Creates a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(endpoints: ServiceEndpoints, timeout: Duration) -> DirectoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DirectoryError::transport)?;
        Ok(Self::with_client(client, endpoints))
    }

    /// Creates a client around an existing `reqwest` client.
    #[must_use]
    pub const fn with_client(client: Client, endpoints: ServiceEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Returns the configured endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> DirectoryResult<Option<T>> {
        let response = request.send().await.map_err(DirectoryError::transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::remote(i64::from(status.as_u16()), body));
        }
        let envelope: ServiceEnvelope<T> =
            response.json().await.map_err(DirectoryError::decode)?;
        envelope.into_data()
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        url: String,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<T>>> {
        debug!(%url, offset, limit, "listing service records");
        let request = self
            .client
            .get(url)
            .query(&[("offset", offset), ("limit", limit)]);
        self.fetch(request).await
    }
}

/// Joins a base URL with a path, percent-encoding each variable segment.
fn service_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_owned();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

#[async_trait]
impl PipelineDirectory for HttpServiceClient {
    async fn list_pipelines(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<PipelineSummary>>> {
        let url = service_url(
            &self.endpoints.process,
            &["api", "service", "auth", "pipelines", "projects", project_id],
        );
        self.fetch_page(url, offset, limit).await
    }
}

#[async_trait]
impl RepositoryDirectory for HttpServiceClient {
    async fn list_by_projects(
        &self,
        project_ids: &[String],
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<RepositorySummary>>> {
        let url = service_url(
            &self.endpoints.repository,
            &["api", "service", "auth", "repositories", "projects"],
        );
        debug!(%url, ?project_ids, offset, limit, "listing repositories");
        let projects: Vec<(&str, &str)> = project_ids
            .iter()
            .map(|id| ("projectIds", id.as_str()))
            .collect();
        let request = self
            .client
            .get(url)
            .query(&projects)
            .query(&[("offset", offset), ("limit", limit)]);
        self.fetch(request).await
    }
}

#[async_trait]
impl EnvironmentDirectory for HttpServiceClient {
    async fn list_environments(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<EnvironmentSummary>>> {
        let url = service_url(
            &self.endpoints.environment,
            &["api", "service", "auth", "environments", "projects", project_id],
        );
        self.fetch_page(url, offset, limit).await
    }

    async fn list_nodes(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<NodeSummary>>> {
        let url = service_url(
            &self.endpoints.environment,
            &["api", "service", "auth", "nodes", "projects", project_id],
        );
        self.fetch_page(url, offset, limit).await
    }
}

#[async_trait]
impl TicketDirectory for HttpServiceClient {
    async fn list_credentials(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CredentialSummary>>> {
        let url = service_url(
            &self.endpoints.ticket,
            &["api", "service", "auth", "credentials", "projects", project_id],
        );
        self.fetch_page(url, offset, limit).await
    }

    async fn list_certs(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CertSummary>>> {
        let url = service_url(
            &self.endpoints.ticket,
            &["api", "service", "auth", "certs", "projects", project_id],
        );
        self.fetch_page(url, offset, limit).await
    }
}

#[async_trait]
impl ProjectDirectory for HttpServiceClient {
    async fn list_projects(
        &self,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<ProjectSummary>>> {
        let url = service_url(&self.endpoints.project, &["api", "service", "auth", "projects"]);
        self.fetch_page(url, offset, limit).await
    }

    async fn find_by_ids(&self, ids: &[String]) -> DirectoryResult<Option<Vec<ProjectSummary>>> {
        let url = service_url(
            &self.endpoints.project,
            &["api", "service", "auth", "projects", "by_ids"],
        );
        debug!(%url, ?ids, "fetching projects by id");
        let request = self.client.post(url).json(ids);
        self.fetch(request).await
    }
}

#[async_trait]
impl CallbackTokenVerifier for HttpServiceClient {
    async fn verify(&self, token: &str) -> DirectoryResult<bool> {
        let url = service_url(
            &self.endpoints.auth,
            &["api", "service", "auth", "callback", "token", "verify"],
        );
        let request = self.client.get(url).header(CALLBACK_TOKEN_HEADER, token);
        let valid: Option<bool> = self.fetch(request).await?;
        Ok(valid.unwrap_or(false))
    }
}
