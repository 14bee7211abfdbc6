//! Conversion between entities and transfer objects.
//!
//! All functions here are pure: they never resolve the owning list, never
//! touch timestamps and never validate. Those concerns belong to the
//! services.

use crate::tracking::{
    domain::{Task, TaskList},
    dto::{TaskDto, TaskListDto},
};
use tracing::trace;

/// Builds an unpersisted-shape task from its transfer form.
///
/// The owning list and timestamps are left unset. A missing title maps to an
/// empty one, which the services reject.
#[must_use]
pub fn task_from_dto(dto: TaskDto) -> Task {
    let mut task = Task::new(dto.title.unwrap_or_default());
    if let Some(id) = dto.id {
        task = task.with_id(id);
    }
    if let Some(description) = dto.description {
        task = task.with_description(description);
    }
    if let Some(due_date) = dto.due_date {
        task = task.with_due_date(due_date);
    }
    if let Some(priority) = dto.priority {
        task = task.with_priority(priority);
    }
    if let Some(status) = dto.status {
        task = task.with_status(status);
    }
    task
}

/// Projects a task onto its transfer form.
#[must_use]
pub fn task_to_dto(task: &Task) -> TaskDto {
    TaskDto {
        id: task.id(),
        title: Some(task.title().to_owned()),
        description: task.description().map(str::to_owned),
        due_date: task.due_date(),
        priority: task.priority(),
        status: task.status(),
    }
}

/// Builds a task list from its transfer form.
///
/// A supplied task sub-collection is converted element by element in order;
/// an absent one stays absent rather than becoming empty.
#[must_use]
pub fn task_list_from_dto(dto: TaskListDto) -> TaskList {
    trace!("mapping task list from transfer form");
    let mut task_list = TaskList::new(dto.title.unwrap_or_default());
    if let Some(id) = dto.id {
        task_list = task_list.with_id(id);
    }
    if let Some(description) = dto.description {
        task_list = task_list.with_description(description);
    }
    if let Some(tasks) = dto.tasks {
        task_list = task_list.with_tasks(tasks.into_iter().map(task_from_dto).collect());
    }
    task_list
}

/// Projects a task list onto its transfer form, deriving `count` and
/// `progress` from the current task collection.
#[must_use]
pub fn task_list_to_dto(task_list: &TaskList) -> TaskListDto {
    trace!("mapping task list to transfer form");
    TaskListDto {
        id: task_list.id(),
        title: Some(task_list.title().to_owned()),
        description: task_list.description().map(str::to_owned),
        count: task_list.count(),
        progress: task_list.progress(),
        tasks: task_list
            .tasks()
            .map(|tasks| tasks.iter().map(task_to_dto).collect()),
    }
}
