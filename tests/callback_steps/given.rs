//! Given steps for IAM callback BDD scenarios.

use super::world::CallbackWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tollgate::iam_callback::domain::records::{PipelineSummary, ProjectSummary};

#[given(r#"the platform holds {count:u64} pipelines in project "{project}""#)]
fn platform_holds_pipelines(
    world: &mut CallbackWorld,
    count: u64,
    project: String,
) -> Result<(), eyre::Report> {
    for index in 1..=count {
        world
            .directory
            .add_pipeline(
                &project,
                PipelineSummary {
                    pipeline_id: format!("p-{index}"),
                    pipeline_name: format!("pipeline {index}"),
                },
            )
            .wrap_err("seed pipeline")?;
    }
    Ok(())
}

#[given(r#"the callback token "{token}" is trusted"#)]
fn callback_token_is_trusted(world: &mut CallbackWorld, token: String) {
    world.trusted_tokens.push(token);
}

#[given(r#"the platform knows project "{code}" named "{name}""#)]
fn platform_knows_project(
    world: &mut CallbackWorld,
    code: String,
    name: String,
) -> Result<(), eyre::Report> {
    world
        .directory
        .add_project(ProjectSummary {
            english_name: code,
            project_name: name,
        })
        .wrap_err("seed project")
}
