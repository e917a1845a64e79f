//! Callback flows over in-memory platform directories.

use rstest::rstest;
use serde_json::{Value, json};
use tollgate::iam_callback::{
    domain::{
        CallbackMethod, CallbackRequest, CallbackResponse, EMPTY_RESULT_MESSAGE, InstanceInfo,
        PageInfo,
    },
    services::{ResourceCallbackError, ResourceCallbackService, TOKEN_TICKET_FAIL},
};

use super::helpers::{CALLBACK_TOKEN, SEEDED_PROJECT, callback_service};

fn list_request(resource_type: &str) -> CallbackRequest {
    CallbackRequest::new(resource_type, CallbackMethod::ListInstance)
        .with_parent("project", SEEDED_PROJECT)
}

#[rstest]
#[case("pipeline", "p-1", "pipeline 1")]
#[case("repertory", "r-1", "platform")]
#[case("environment", "e-1", "production")]
#[case("env_node", "n-1", "build-agent-01")]
#[case("credential", "c-1", "deploy key")]
#[case("cert", "ios-dist", "ios-dist")]
#[tokio::test]
async fn every_listable_type_resolves(
    callback_service: eyre::Result<ResourceCallbackService>,
    #[case] resource_type: &str,
    #[case] first_id: &str,
    #[case] first_name: &str,
) -> eyre::Result<()> {
    let service = callback_service?;

    let response = service
        .resource_callback(&list_request(resource_type), CALLBACK_TOKEN)
        .await?
        .ok_or_else(|| eyre::eyre!("{resource_type} should be listable"))?;

    let CallbackResponse::List(list) = response else {
        return Err(eyre::eyre!("expected a list envelope"));
    };
    assert_eq!(list.code, 0);
    assert_eq!(
        list.data.result.first(),
        Some(&InstanceInfo::new(first_id, first_name))
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_envelope_serializes_for_iam(
    callback_service: eyre::Result<ResourceCallbackService>,
) -> eyre::Result<()> {
    let service = callback_service?;
    let request = list_request("pipeline").with_page(PageInfo::new(1, 1));

    let response = service
        .resource_callback(&request, CALLBACK_TOKEN)
        .await?
        .ok_or_else(|| eyre::eyre!("pipelines are listable"))?;

    assert_eq!(
        serde_json::to_value(&response)?,
        json!({
            "code": 0,
            "message": "",
            "data": {
                "count": 3,
                "result": [{"id": "p-2", "displayName": "pipeline 2"}]
            }
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn wire_request_round_trips_through_service(
    callback_service: eyre::Result<ResourceCallbackService>,
) -> eyre::Result<()> {
    let service = callback_service?;
    let body: Value = json!({
        "type": "project",
        "method": "fetch_instance_info",
        "filter": {"idList": ["web", "missing", "devops"]}
    });
    let request: CallbackRequest = serde_json::from_value(body)?;

    let response = service
        .resource_callback(&request, CALLBACK_TOKEN)
        .await?
        .ok_or_else(|| eyre::eyre!("project callbacks always answer"))?;

    let CallbackResponse::Fetch(fetch) = response else {
        return Err(eyre::eyre!("expected a fetch envelope"));
    };
    let ids: Vec<&str> = fetch.data.iter().map(|info| info.id.as_str()).collect();
    assert_eq!(ids, vec!["devops", "web"]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unseeded_project_yields_empty_envelope(
    callback_service: eyre::Result<ResourceCallbackService>,
) -> eyre::Result<()> {
    let service = callback_service?;

    let response = service
        .list_resources(
            "unknown-project",
            "pipeline_list",
            CallbackMethod::ListInstance,
            None,
            CALLBACK_TOKEN,
        )
        .await?
        .ok_or_else(|| eyre::eyre!("pipelines are listable"))?;

    assert_eq!(response.message, EMPTY_RESULT_MESSAGE);
    assert_eq!(response.data.count, 0);
    assert!(response.data.result.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn stale_token_carries_ticket_failure_code(
    callback_service: eyre::Result<ResourceCallbackService>,
) -> eyre::Result<()> {
    let service = callback_service?;

    let result = service
        .resource_callback(&list_request("pipeline"), "stale")
        .await;

    let Err(err) = result else {
        return Err(eyre::eyre!("stale token must be rejected"));
    };
    assert!(matches!(err, ResourceCallbackError::InvalidToken));
    assert_eq!(err.message_code(), Some(TOKEN_TICKET_FAIL));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unknown_action_is_an_error(
    callback_service: eyre::Result<ResourceCallbackService>,
) -> eyre::Result<()> {
    let service = callback_service?;

    let result = service
        .list_resources(
            SEEDED_PROJECT,
            "artifact_download",
            CallbackMethod::ListInstance,
            None,
            CALLBACK_TOKEN,
        )
        .await;

    assert!(matches!(
        result,
        Err(ResourceCallbackError::UnknownResourceType { ref resource_type, .. })
            if resource_type == "artifact"
    ));
    Ok(())
}
