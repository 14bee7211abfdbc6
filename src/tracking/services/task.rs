//! Service layer for tasks scoped to a task list.
//!
//! Creation and update validate differently: creation defaults the priority
//! and always opens the task, while update requires both fields explicitly.

use crate::tracking::{
    domain::{Task, TaskId, TaskListId, TaskPriority, TaskStatus, ValidationError},
    ports::{TaskListRepository, TaskRepository},
    services::{TrackingError, TrackingResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<T, L, C>
where
    T: TaskRepository,
    L: TaskListRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    task_lists: Arc<L>,
    clock: Arc<C>,
}

impl<T, L, C> TaskService<T, L, C>
where
    T: TaskRepository,
    L: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, task_lists: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            task_lists,
            clock,
        }
    }

    /// Returns the tasks of a task list.
    ///
    /// The list itself is not required to exist; an unknown id yields an
    /// empty result.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when the lookup fails.
    pub async fn list(&self, task_list_id: TaskListId) -> TrackingResult<Vec<Task>> {
        debug!(task_list_id = %task_list_id, "listing tasks");
        Ok(self.tasks.find_by_task_list_id(task_list_id).await?)
    }

    /// Creates a task under an existing task list.
    ///
    /// The priority defaults to [`TaskPriority::Medium`] and the status is
    /// always [`TaskStatus::Open`], whatever the caller supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Validation`] when the task already has an id
    /// or an empty title, [`TrackingError::TaskListNotFound`] when the list
    /// does not exist, or [`TrackingError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, task_list_id: TaskListId, task: Task) -> TrackingResult<Task> {
        debug!(task_list_id = %task_list_id, title = task.title(), "creating task");
        if let Some(id) = task.id() {
            return Err(rejected(ValidationError::TaskIdAlreadySet(id)));
        }
        if task.title().is_empty() {
            return Err(rejected(ValidationError::EmptyTaskTitle));
        }

        let Some(task_list) = self.task_lists.find_by_id(task_list_id).await? else {
            warn!(task_list_id = %task_list_id, "task list not found for new task");
            return Err(TrackingError::TaskListNotFound(task_list_id));
        };
        let parent_id = task_list.id().unwrap_or(task_list_id);

        let priority = task.priority().unwrap_or(TaskPriority::Medium);
        let mut candidate = task
            .with_priority(priority)
            .with_status(TaskStatus::Open)
            .with_task_list_id(parent_id);
        candidate.stamp_created(&*self.clock);

        let created = self.tasks.save(candidate).await?;
        info!(task_list_id = %parent_id, task_id = ?created.id(), "created task");
        Ok(created)
    }

    /// Finds a task by compound key.
    ///
    /// Returns `Ok(None)` when no match exists, including when the task
    /// belongs to a different list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when the lookup fails.
    pub async fn get(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> TrackingResult<Option<Task>> {
        debug!(task_list_id = %task_list_id, task_id = %task_id, "fetching task");
        Ok(self
            .tasks
            .find_by_task_list_id_and_id(task_list_id, task_id)
            .await?)
    }

    /// Updates an existing task's editable fields.
    ///
    /// Identity, owning list and creation timestamp are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Validation`] when the body has no id, an id
    /// different from `task_id`, no priority, no status, or an empty title;
    /// [`TrackingError::TaskNotFound`] when no task matches the compound
    /// key; or [`TrackingError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
        task: Task,
    ) -> TrackingResult<Task> {
        debug!(task_list_id = %task_list_id, task_id = %task_id, "updating task");
        validate_update(task_id, &task).map_err(rejected)?;

        let Some(mut existing) = self
            .tasks
            .find_by_task_list_id_and_id(task_list_id, task_id)
            .await?
        else {
            warn!(task_list_id = %task_list_id, task_id = %task_id, "task not found for update");
            return Err(TrackingError::TaskNotFound {
                task_list_id,
                task_id,
            });
        };
        existing.apply_changes(task, &*self.clock);
        let updated = self.tasks.save(existing).await?;
        info!(task_list_id = %task_list_id, task_id = %task_id, "updated task");
        Ok(updated)
    }

    /// Deletes the task matching the compound key. A missing task is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when persistence fails.
    pub async fn delete(&self, task_list_id: TaskListId, task_id: TaskId) -> TrackingResult<()> {
        self.tasks
            .delete_by_task_list_id_and_id(task_list_id, task_id)
            .await?;
        info!(task_list_id = %task_list_id, task_id = %task_id, "deleted task");
        Ok(())
    }
}

fn validate_update(task_id: TaskId, task: &Task) -> Result<(), ValidationError> {
    let body_id = task.id().ok_or(ValidationError::MissingTaskId)?;
    if body_id != task_id {
        return Err(ValidationError::TaskIdMismatch {
            path: task_id,
            body: body_id,
        });
    }
    if task.priority().is_none() {
        return Err(ValidationError::MissingPriority);
    }
    if task.status().is_none() {
        return Err(ValidationError::MissingStatus);
    }
    if task.title().is_empty() {
        return Err(ValidationError::EmptyTaskTitle);
    }
    Ok(())
}

fn rejected(err: ValidationError) -> TrackingError {
    warn!(error = %err, "rejected task request");
    err.into()
}
