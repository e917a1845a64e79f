//! In-memory resource directory for callback tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::iam_callback::{
    domain::records::{
        CertSummary, CredentialSummary, EnvironmentSummary, NodeSummary, PipelineSummary,
        ProjectSummary, RecordPage, RepositorySummary,
    },
    ports::{
        DirectoryError, DirectoryResult, EnvironmentDirectory, PipelineDirectory,
        ProjectDirectory, RepositoryDirectory, TicketDirectory,
    },
};

/// Thread-safe in-memory stand-in for every platform directory.
///
/// Records are grouped per project. A project that was never seeded for a
/// resource kind reports absent data, matching the services' behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    pipelines: HashMap<String, Vec<PipelineSummary>>,
    repositories: HashMap<String, Vec<RepositorySummary>>,
    environments: HashMap<String, Vec<EnvironmentSummary>>,
    nodes: HashMap<String, Vec<NodeSummary>>,
    credentials: HashMap<String, Vec<CredentialSummary>>,
    certs: HashMap<String, Vec<CertSummary>>,
    projects: Vec<ProjectSummary>,
}

impl InMemoryResourceDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pipeline to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_pipeline(&self, project_id: &str, record: PipelineSummary) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.pipelines, project_id, record))
    }

    /// Adds a code repository to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_repository(
        &self,
        project_id: &str,
        record: RepositorySummary,
    ) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.repositories, project_id, record))
    }

    /// Adds an environment to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_environment(
        &self,
        project_id: &str,
        record: EnvironmentSummary,
    ) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.environments, project_id, record))
    }

    /// Adds a node to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_node(&self, project_id: &str, record: NodeSummary) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.nodes, project_id, record))
    }

    /// Adds a credential to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_credential(
        &self,
        project_id: &str,
        record: CredentialSummary,
    ) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.credentials, project_id, record))
    }

    /// Adds a certificate to a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_cert(&self, project_id: &str, record: CertSummary) -> DirectoryResult<()> {
        self.write(|state| push(&mut state.certs, project_id, record))
    }

    /// Adds a project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the state lock is poisoned.
    pub fn add_project(&self, record: ProjectSummary) -> DirectoryResult<()> {
        self.write(|state| state.projects.push(record))
    }

    fn write(&self, f: impl FnOnce(&mut DirectoryState)) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))?;
        f(&mut state);
        Ok(())
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))
    }
}

fn push<T>(index: &mut HashMap<String, Vec<T>>, project_id: &str, record: T) {
    index.entry(project_id.to_owned()).or_default().push(record);
}

fn page_of<T: Clone>(records: &[T], offset: u64, limit: u64) -> RecordPage<T> {
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    let page = records.iter().skip(skip).take(take).cloned().collect();
    RecordPage::new(records.len() as u64, page)
}

fn project_page<T: Clone>(
    index: &HashMap<String, Vec<T>>,
    project_id: &str,
    offset: u64,
    limit: u64,
) -> Option<RecordPage<T>> {
    index
        .get(project_id)
        .map(|records| page_of(records, offset, limit))
}

#[async_trait]
impl PipelineDirectory for InMemoryResourceDirectory {
    async fn list_pipelines(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<PipelineSummary>>> {
        let state = self.read()?;
        Ok(project_page(&state.pipelines, project_id, offset, limit))
    }
}

#[async_trait]
impl RepositoryDirectory for InMemoryResourceDirectory {
    async fn list_by_projects(
        &self,
        project_ids: &[String],
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<RepositorySummary>>> {
        let state = self.read()?;
        let mut found = false;
        let mut records = Vec::new();
        for project_id in project_ids {
            if let Some(project_records) = state.repositories.get(project_id) {
                found = true;
                records.extend(project_records.iter().cloned());
            }
        }
        Ok(found.then(|| page_of(&records, offset, limit)))
    }
}

#[async_trait]
impl EnvironmentDirectory for InMemoryResourceDirectory {
    async fn list_environments(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<EnvironmentSummary>>> {
        let state = self.read()?;
        Ok(project_page(&state.environments, project_id, offset, limit))
    }

    async fn list_nodes(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<NodeSummary>>> {
        let state = self.read()?;
        Ok(project_page(&state.nodes, project_id, offset, limit))
    }
}

#[async_trait]
impl TicketDirectory for InMemoryResourceDirectory {
    async fn list_credentials(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CredentialSummary>>> {
        let state = self.read()?;
        Ok(project_page(&state.credentials, project_id, offset, limit))
    }

    async fn list_certs(
        &self,
        project_id: &str,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<CertSummary>>> {
        let state = self.read()?;
        Ok(project_page(&state.certs, project_id, offset, limit))
    }
}

#[async_trait]
impl ProjectDirectory for InMemoryResourceDirectory {
    async fn list_projects(
        &self,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<ProjectSummary>>> {
        let state = self.read()?;
        if state.projects.is_empty() {
            return Ok(None);
        }
        Ok(Some(page_of(&state.projects, offset, limit)))
    }

    async fn find_by_ids(&self, ids: &[String]) -> DirectoryResult<Option<Vec<ProjectSummary>>> {
        let state = self.read()?;
        let found = state
            .projects
            .iter()
            .filter(|project| ids.contains(&project.english_name))
            .cloned()
            .collect();
        Ok(Some(found))
    }
}
