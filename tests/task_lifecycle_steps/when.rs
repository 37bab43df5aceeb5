//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::services::{CreateTaskRequest, MoveTaskRequest};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.workspace.tasks().create_task(CreateTaskRequest::new(title)))
        .wrap_err("create task for lifecycle scenario")?;
    world.task = Some(created);
    Ok(())
}

#[when(r#"a task titled "{title}" is created with status "{status}""#)]
fn create_task_with_status(
    world: &mut TaskLifecycleWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title).with_status(status);
    let created = run_async(world.workspace.tasks().create_task(request))
        .wrap_err("create task with status for lifecycle scenario")?;
    world.task = Some(created);
    Ok(())
}

#[when(r#"the task is moved to "{status}""#)]
fn move_task(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let payload = world.task()?.id().to_string();
    let request = MoveTaskRequest::parse(&payload, &status).wrap_err("parse drag move")?;
    let moved = run_async(world.workspace.tasks().move_task(request)).wrap_err("move task")?;
    world.task = Some(moved);
    Ok(())
}

#[when(r#"the payload "{payload}" is dropped on "{status}""#)]
fn drop_payload(world: &mut TaskLifecycleWorld, payload: String, status: String) {
    let result = match MoveTaskRequest::parse(&payload, &status) {
        Ok(request) => run_async(world.workspace.tasks().move_task(request)),
        Err(err) => Err(err),
    };
    world.last_move = Some(result);
}
