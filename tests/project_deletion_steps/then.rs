//! Then steps for project deletion BDD scenarios.

use super::world::{ProjectDeletionWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::group::services::GroupServiceError;
use taskboard::store::ports::RepositoryError;

fn last_delete(
    world: &ProjectDeletionWorld,
) -> Result<&Result<(), GroupServiceError>, eyre::Report> {
    world
        .last_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deletion result"))
}

#[then("the deletion is refused with {count:usize} dependent task")]
fn deletion_refused(world: &ProjectDeletionWorld, count: usize) -> Result<(), eyre::Report> {
    match last_delete(world)? {
        Err(GroupServiceError::Repository(RepositoryError::ReferentialConflict {
            dependents,
            ..
        })) if *dependents == count => Ok(()),
        other => Err(eyre::eyre!(
            "expected conflict with {count} dependents, got {other:?}"
        )),
    }
}

#[then("the deletion succeeds")]
fn deletion_succeeds(world: &ProjectDeletionWorld) -> Result<(), eyre::Report> {
    match last_delete(world)? {
        Ok(()) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected deletion to succeed, got {err}")),
    }
}

#[then("the deletion fails because the project is missing")]
fn deletion_not_found(world: &ProjectDeletionWorld) -> Result<(), eyre::Report> {
    match last_delete(world)? {
        Err(GroupServiceError::Repository(RepositoryError::NotFound { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}

#[then("the workspace has {count:usize} projects")]
fn project_count(world: &ProjectDeletionWorld, count: usize) -> Result<(), eyre::Report> {
    let projects = run_async(world.workspace.projects().list_groups())?;
    eyre::ensure!(
        projects.len() == count,
        "expected {count} projects, found {}",
        projects.len()
    );
    Ok(())
}

#[then("the workspace has {count:usize} task")]
fn task_count(world: &ProjectDeletionWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.workspace.tasks().list_tasks())?;
    eyre::ensure!(tasks.len() == count, "expected {count} tasks, found {}", tasks.len());
    Ok(())
}
