//! Project permission flows over the in-memory IAM.

use std::sync::Arc;

use rstest::{fixture, rstest};
use tollgate::iam_callback::domain::ResourceType;
use tollgate::project_permission::{
    adapters::memory::{InMemoryIam, InMemoryProjectStore},
    domain::{AuthPermission, ResourceRegistration},
    services::{ProjectPermissionError, ProjectPermissionService},
};

struct Platform {
    iam: Arc<InMemoryIam>,
    store: Arc<InMemoryProjectStore>,
    service: ProjectPermissionService,
}

#[fixture]
fn platform() -> Platform {
    let iam = Arc::new(InMemoryIam::new());
    let store = Arc::new(InMemoryProjectStore::new());
    let service =
        ProjectPermissionService::new(iam.clone(), iam.clone(), iam.clone(), store.clone());
    Platform {
        iam,
        store,
        service,
    }
}

#[rstest]
#[tokio::test]
async fn creator_becomes_member_and_sees_project(platform: Platform) -> eyre::Result<()> {
    platform
        .iam
        .grant("admin", ResourceType::Project, "", AuthPermission::Create)?;
    let registration = ResourceRegistration::new("payments", "Payments")?;

    platform
        .service
        .create_resources("admin", Some("bearer"), &registration)
        .await?;

    assert!(
        platform
            .service
            .verify_user_project_permission(None, "payments", "admin")
            .await?
    );
    assert_eq!(
        platform.service.get_user_projects("admin").await?,
        vec!["payments".to_owned()]
    );
    let available = platform.service.get_user_projects_available("admin").await?;
    assert_eq!(available.get("payments").map(String::as_str), Some("Payments"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn rename_requires_edit_grant(platform: Platform) -> eyre::Result<()> {
    platform
        .iam
        .grant("admin", ResourceType::Project, "", AuthPermission::Create)?;
    platform
        .service
        .create_resources("admin", None, &ResourceRegistration::new("payments", "Payments")?)
        .await?;

    let denied = platform
        .service
        .modify_resource("admin", "payments", "Billing")
        .await;
    assert!(matches!(
        denied,
        Err(ProjectPermissionError::PermissionDenied { .. })
    ));

    platform
        .iam
        .grant("admin", ResourceType::Project, "payments", AuthPermission::Edit)?;
    platform
        .service
        .modify_resource("admin", "payments", "Billing")
        .await?;
    let available = platform.service.get_user_projects_available("admin").await?;
    assert_eq!(available.get("payments").map(String::as_str), Some("Billing"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn wildcard_users_see_every_stored_project(platform: Platform) -> eyre::Result<()> {
    for code in ["alpha", "beta"] {
        platform.store.insert(code)?;
    }
    platform.iam.grant_all_projects("auditor")?;

    let projects = platform.service.get_user_projects("auditor").await?;

    assert_eq!(projects, vec!["alpha".to_owned(), "beta".to_owned()]);
    assert!(platform.service.get_user_projects("nobody").await?.is_empty());
    Ok(())
}

#[rstest]
fn deletion_is_accepted(platform: Platform) -> eyre::Result<()> {
    platform.service.delete_resource("payments")?;
    Ok(())
}
