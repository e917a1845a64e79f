//! Shared world state for IAM callback BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tollgate::iam_callback::{
    adapters::memory::{InMemoryResourceDirectory, StaticTokenVerifier},
    domain::CallbackResponse,
    services::{ResourceCallbackError, ResourceCallbackService, ResourceDirectories},
};

/// Scenario world for callback behaviour tests.
pub struct CallbackWorld {
    pub directory: Arc<InMemoryResourceDirectory>,
    pub trusted_tokens: Vec<String>,
    pub last_response: Option<Result<Option<CallbackResponse>, ResourceCallbackError>>,
}

impl CallbackWorld {
    /// Creates a world with an empty directory and no trusted tokens.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: Arc::new(InMemoryResourceDirectory::new()),
            trusted_tokens: Vec::new(),
            last_response: None,
        }
    }

    /// Builds a callback service over the world's directory and tokens.
    #[must_use]
    pub fn service(&self) -> ResourceCallbackService {
        ResourceCallbackService::new(
            ResourceDirectories::shared(Arc::clone(&self.directory)),
            Arc::new(StaticTokenVerifier::new(self.trusted_tokens.clone())),
        )
    }
}

impl Default for CallbackWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CallbackWorld {
    CallbackWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
