//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::domain::{Task, TaskStatus};

fn stored_task(world: &TaskLifecycleWorld) -> Result<Task, eyre::Report> {
    let id = world.task()?.id();
    Ok(run_async(world.workspace.tasks().get_task(id))?)
}

#[then("the task has id {id:u64}")]
fn task_has_id(world: &TaskLifecycleWorld, id: u64) -> Result<(), eyre::Report> {
    let actual = world.task()?.id().value();
    eyre::ensure!(actual == id, "expected id {id}, found {actual}");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = stored_task(world)?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_is_complete(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(task.completed_at().is_some(), "expected a completion timestamp");
    Ok(())
}

#[then("the task has no completion timestamp")]
fn task_is_open(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.completed_at().is_none(),
        "expected no completion timestamp, found {:?}",
        task.completed_at()
    );
    Ok(())
}

#[then("the move fails with a validation error")]
fn move_fails_validation(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    match result {
        Err(err) if err.is_validation() => Ok(()),
        other => Err(eyre::eyre!("expected validation error, got {other:?}")),
    }
}
