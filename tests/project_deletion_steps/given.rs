//! Given steps for project deletion BDD scenarios.

use super::world::{ProjectDeletionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::group::services::CreateGroupRequest;
use taskboard::task::services::CreateTaskRequest;

#[given("a workspace with {count:usize} projects")]
fn workspace_with_projects(
    world: &mut ProjectDeletionWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    for index in 1..=count {
        run_async(
            world
                .workspace
                .projects()
                .create_group(CreateGroupRequest::new(format!("Project {index}"))),
        )
        .wrap_err("create project for deletion scenario")?;
    }
    Ok(())
}

#[given("a task filed under project {id:u64}")]
fn task_under_project(world: &mut ProjectDeletionWorld, id: u64) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new("Dependent work").with_project(id);
    let created = run_async(world.workspace.tasks().create_task(request))
        .wrap_err("create dependent task")?;
    world.task = Some(created);
    Ok(())
}
