//! When steps for Composer repository BDD scenarios.

use super::world::{ComposerWorld, run_async};
use rstest_bdd_macros::when;
use tollgate::composer::domain::{ArtifactFile, Principal};

#[when(r#"user "{user}" deploys "{uri}""#)]
fn user_deploys(world: &mut ComposerWorld, user: String, uri: String) -> Result<(), eyre::Report> {
    let artifact = world.artifact(&uri)?;
    let file = ArtifactFile::new(format!("archive of {uri}").into_bytes())?;
    let principal = Principal::new(user)?;
    match run_async(world.service.deploy(&principal, &artifact, file.clone())) {
        Ok(()) => world.deployed = Some(file),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"user "{user}" installs "{uri}""#)]
fn user_installs(world: &mut ComposerWorld, user: String, uri: String) -> Result<(), eyre::Report> {
    let artifact = world.artifact(&uri)?;
    let principal = Principal::new(user)?;
    match run_async(world.service.install_require(&principal, &artifact)) {
        Ok(file) => world.installed = file,
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"user "{user}" requests the repository index"#)]
fn user_requests_index(world: &mut ComposerWorld, user: String) -> Result<(), eyre::Report> {
    let artifact = world.artifact("/packages.json")?;
    let principal = Principal::new(user)?;
    if let Err(err) = run_async(world.service.packages(&principal, &artifact)) {
        world.last_error = Some(err);
    }
    Ok(())
}
