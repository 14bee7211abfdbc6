//! Then steps for task tracking BDD scenarios.

use super::world::{TrackingWorld, run_async};
use rstest_bdd_macros::then;
use tasktrack::tracking::{
    domain::{TaskPriority, TaskStatus},
    mapper::task_list_to_dto,
};

#[then(r#"the task has status "{status}" and priority "{priority}""#)]
fn task_has_status_and_priority(
    world: &TrackingWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let expected_priority = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let task = world.last_task()?;

    if task.status() != Some(expected_status) || task.priority() != Some(expected_priority) {
        return Err(eyre::eyre!(
            "expected {expected_status}/{expected_priority}, found {:?}/{:?}",
            task.status(),
            task.priority()
        ));
    }
    Ok(())
}

#[then(r#"the list reports {count:u64} tasks with progress "{progress}""#)]
fn list_reports(world: &TrackingWorld, count: u64, progress: String) -> Result<(), eyre::Report> {
    let expected_progress: f64 = progress
        .parse()
        .map_err(|err| eyre::eyre!("invalid expected progress in scenario: {err}"))?;
    let task_list_id = world.task_list_id()?;
    let task_list = run_async(world.task_lists.get(task_list_id))?
        .ok_or_else(|| eyre::eyre!("scenario task list not found"))?;
    let dto = task_list_to_dto(&task_list);

    if u64::try_from(dto.count)? != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", dto.count));
    }
    if dto.progress != expected_progress {
        return Err(eyre::eyre!(
            "expected progress {expected_progress}, found {}",
            dto.progress
        ));
    }
    Ok(())
}

#[then("the request fails with a not found error")]
fn request_fails_not_found(world: &TrackingWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected not found error, got {other:?}")),
    }
}

#[then("the request fails with a validation error")]
fn request_fails_validation(world: &TrackingWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(err) if err.is_validation() => Ok(()),
        other => Err(eyre::eyre!("expected validation error, got {other:?}")),
    }
}
