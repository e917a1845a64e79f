//! Shared world state for Composer repository BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tollgate::composer::{
    adapters::{
        local::LocalComposerRepository,
        memory::{InMemoryArtifactStorage, InMemoryPermissionChecker, InMemoryRepositoryCatalog},
    },
    domain::{ArtifactFile, ComposerArtifactInfo, RepositoryCategory},
    services::{ComposerService, ComposerServiceError},
};

/// Domain under which package URLs are published.
pub const DOMAIN: &str = "https://artifacts.example.com/composer";

/// Scenario world for Composer behaviour tests.
pub struct ComposerWorld {
    pub catalog: Arc<InMemoryRepositoryCatalog>,
    pub permissions: Arc<InMemoryPermissionChecker>,
    pub service: ComposerService,
    pub repository: Option<(String, String)>,
    pub deployed: Option<ArtifactFile>,
    pub installed: Option<ArtifactFile>,
    pub last_error: Option<ComposerServiceError>,
}

impl ComposerWorld {
    /// Creates a world with one local repository implementation.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Arc::new(InMemoryRepositoryCatalog::new());
        let permissions = Arc::new(InMemoryPermissionChecker::new());
        let local = LocalComposerRepository::new(
            Arc::new(InMemoryArtifactStorage::new()),
            DOMAIN,
            Arc::new(DefaultClock),
        );
        let service = ComposerService::new(catalog.clone(), permissions.clone())
            .with_repository(RepositoryCategory::Local, Arc::new(local));
        Self {
            catalog,
            permissions,
            service,
            repository: None,
            deployed: None,
            installed: None,
            last_error: None,
        }
    }

    /// Addresses `uri` inside the scenario repository.
    ///
    /// # Errors
    ///
    /// Returns an error when no repository was declared.
    pub fn artifact(&self, uri: &str) -> Result<ComposerArtifactInfo, eyre::Report> {
        let (project, repo) = self
            .repository
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing repository in scenario world"))?;
        Ok(ComposerArtifactInfo::new(project.as_str(), repo.as_str(), uri)?)
    }
}

impl Default for ComposerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ComposerWorld {
    ComposerWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
