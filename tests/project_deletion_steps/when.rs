//! When steps for project deletion BDD scenarios.

use super::world::{ProjectDeletionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::store::domain::EntityId;

#[when("project {id:u64} is deleted")]
fn delete_project(world: &mut ProjectDeletionWorld, id: u64) {
    let result = run_async(world.workspace.projects().delete_group(EntityId::new(id)));
    world.last_delete = Some(result);
}

#[when("the task is deleted")]
fn delete_task(world: &mut ProjectDeletionWorld) -> Result<(), eyre::Report> {
    let task = world
        .task
        .take()
        .ok_or_else(|| eyre::eyre!("missing dependent task in scenario world"))?;
    run_async(world.workspace.tasks().delete_task(task.id())).wrap_err("delete dependent task")?;
    Ok(())
}
