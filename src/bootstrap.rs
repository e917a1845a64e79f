//! Adapter wiring from [`TollgateSettings`].
//!
//! The embedding web layer calls these to obtain ready services; nothing
//! here performs I/O beyond opening pools and directories.

use crate::composer::adapters::fs::FsArtifactStorage;
use crate::composer::ports::StorageError;
use crate::config::TollgateSettings;
use crate::iam_callback::{
    adapters::http::HttpServiceClient,
    ports::DirectoryError,
    services::{ResourceCallbackService, ResourceDirectories},
};
use crate::project_permission::{adapters::postgres::PostgresProjectStore, ports::ProjectStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while wiring adapters.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] DirectoryError),
    /// The project database pool could not be opened.
    #[error(transparent)]
    Database(#[from] ProjectStoreError),
    /// The artifact storage root could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Builds the callback service over the platform service APIs.
///
/// # Errors
///
/// Returns [`BootstrapError::Client`] when the HTTP client cannot be built.
pub fn callback_service(
    settings: &TollgateSettings,
) -> Result<ResourceCallbackService, BootstrapError> {
    let client = Arc::new(HttpServiceClient::new(
        settings.services.endpoints(),
        settings.services.timeout(),
    )?);
    info!(
        default_page_limit = settings.callback.default_page_limit,
        "callback service configured"
    );
    Ok(
        ResourceCallbackService::new(ResourceDirectories::shared(client.clone()), client)
            .with_default_page_limit(settings.callback.default_page_limit),
    )
}

/// Opens the project store when a database URL is configured.
///
/// # Errors
///
/// Returns [`BootstrapError::Database`] when the pool cannot connect.
pub fn project_store(
    settings: &TollgateSettings,
) -> Result<Option<PostgresProjectStore>, BootstrapError> {
    let Some(url) = settings.database.url.as_deref() else {
        info!("no database configured, project store disabled");
        return Ok(None);
    };
    let store = PostgresProjectStore::connect(url, settings.database.pool_size)?;
    Ok(Some(store))
}

/// Opens the Composer artifact storage root.
///
/// # Errors
///
/// Returns [`BootstrapError::Storage`] when the directory cannot be opened.
pub fn composer_storage(settings: &TollgateSettings) -> Result<FsArtifactStorage, BootstrapError> {
    let root = settings.composer.storage_root();
    let storage = FsArtifactStorage::open(root)?;
    info!(%root, "composer storage opened");
    Ok(storage)
}
