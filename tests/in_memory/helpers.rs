//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use tollgate::iam_callback::{
    adapters::memory::{InMemoryResourceDirectory, StaticTokenVerifier},
    domain::records::{
        CertSummary, CredentialSummary, EnvironmentSummary, NodeSummary, PipelineSummary,
        ProjectSummary, RepositorySummary,
    },
    services::{ResourceCallbackService, ResourceDirectories},
};

/// Token accepted by the callback fixture.
pub const CALLBACK_TOKEN: &str = "iam-callback-token";

/// Project seeded with one resource of every listable kind.
pub const SEEDED_PROJECT: &str = "devops";

/// Seeds a directory with resources in [`SEEDED_PROJECT`] and three projects.
///
/// # Errors
///
/// Returns the directory error when seeding fails.
pub fn seeded_directory() -> eyre::Result<InMemoryResourceDirectory> {
    let directory = InMemoryResourceDirectory::new();
    for index in 1..=3 {
        directory.add_pipeline(
            SEEDED_PROJECT,
            PipelineSummary {
                pipeline_id: format!("p-{index}"),
                pipeline_name: format!("pipeline {index}"),
            },
        )?;
    }
    directory.add_repository(
        SEEDED_PROJECT,
        RepositorySummary {
            repository_hash_id: "r-1".to_owned(),
            alias_name: "platform".to_owned(),
        },
    )?;
    directory.add_environment(
        SEEDED_PROJECT,
        EnvironmentSummary {
            env_hash_id: "e-1".to_owned(),
            name: "production".to_owned(),
        },
    )?;
    directory.add_node(
        SEEDED_PROJECT,
        NodeSummary {
            node_hash_id: "n-1".to_owned(),
            name: "build-agent-01".to_owned(),
        },
    )?;
    directory.add_credential(
        SEEDED_PROJECT,
        CredentialSummary {
            credential_id: "c-1".to_owned(),
            credential_remark: Some("deploy key".to_owned()),
        },
    )?;
    directory.add_cert(
        SEEDED_PROJECT,
        CertSummary {
            cert_id: "ios-dist".to_owned(),
            cert_remark: None,
        },
    )?;
    for code in ["devops", "mobile", "web"] {
        directory.add_project(ProjectSummary {
            english_name: code.to_owned(),
            project_name: code.to_uppercase(),
        })?;
    }
    Ok(directory)
}

/// Callback service over the seeded directory.
///
/// # Errors
///
/// Returns the seeding error.
#[fixture]
pub fn callback_service() -> eyre::Result<ResourceCallbackService> {
    let directory = Arc::new(seeded_directory()?);
    Ok(ResourceCallbackService::new(
        ResourceDirectories::shared(directory),
        Arc::new(StaticTokenVerifier::new([CALLBACK_TOKEN])),
    ))
}
