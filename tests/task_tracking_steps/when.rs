//! When steps for task tracking BDD scenarios.

use super::world::{TrackingWorld, run_async};
use rstest_bdd_macros::when;
use tasktrack::tracking::domain::{Task, TaskId, TaskPriority, TaskStatus};

#[when(r#"a task titled "{title}" is added with status "{status}""#)]
fn task_added_with_status(
    world: &mut TrackingWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let requested_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task_list_id = world.task_list_id()?;
    let result = run_async(
        world
            .tasks
            .create(task_list_id, Task::new(title).with_status(requested_status)),
    );
    world.record(result);
    Ok(())
}

#[when(r#"a task titled "{title}" is added to the missing list"#)]
fn task_added_to_missing_list(
    world: &mut TrackingWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_list_id = world.task_list_id()?;
    let result = run_async(world.tasks.create(task_list_id, Task::new(title)));
    world.record(result);
    Ok(())
}

#[when(r#"the task is updated with status "{status}" and priority "{priority}""#)]
fn task_updated(
    world: &mut TrackingWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let new_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let new_priority = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let task_list_id = world.task_list_id()?;
    let task = world.last_task()?;
    let task_id = task
        .id()
        .ok_or_else(|| eyre::eyre!("scenario task has no id"))?;
    let body = Task::new(task.title())
        .with_id(task_id)
        .with_status(new_status)
        .with_priority(new_priority);

    let result = run_async(world.tasks.update(task_list_id, task_id, body));
    world.record(result);
    Ok(())
}

#[when("the task is updated with a different id")]
fn task_updated_with_different_id(world: &mut TrackingWorld) -> Result<(), eyre::Report> {
    let task_list_id = world.task_list_id()?;
    let task = world.last_task()?;
    let task_id = task
        .id()
        .ok_or_else(|| eyre::eyre!("scenario task has no id"))?;
    let body = Task::new(task.title())
        .with_id(TaskId::new())
        .with_status(TaskStatus::Closed)
        .with_priority(TaskPriority::High);

    let result = run_async(world.tasks.update(task_list_id, task_id, body));
    world.record(result);
    Ok(())
}
