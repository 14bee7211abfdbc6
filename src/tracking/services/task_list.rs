//! Service layer for task list management.
//!
//! Provides [`TaskListService`], which validates caller input, assigns
//! timestamps and delegates storage to a [`TaskListRepository`].

use crate::tracking::{
    domain::{TaskList, TaskListId, ValidationError},
    ports::TaskListRepository,
    services::{TrackingError, TrackingResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TrackingResult<Vec<TaskList>> {
        debug!("listing task lists");
        Ok(self.repository.find_all().await?)
    }

    /// Creates a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Validation`] when the list already has an id
    /// or an empty title, or [`TrackingError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, mut task_list: TaskList) -> TrackingResult<TaskList> {
        debug!(title = task_list.title(), "creating task list");
        if let Some(id) = task_list.id() {
            return Err(rejected(ValidationError::TaskListIdAlreadySet(id)));
        }
        if task_list.title().is_empty() {
            return Err(rejected(ValidationError::EmptyTaskListTitle));
        }

        task_list.stamp_created(&*self.clock);
        let created = self.repository.save(task_list).await?;
        info!(task_list_id = ?created.id(), "created task list");
        Ok(created)
    }

    /// Finds a task list by identifier.
    ///
    /// Returns `Ok(None)` when the task list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TaskListId) -> TrackingResult<Option<TaskList>> {
        debug!(task_list_id = %id, "fetching task list");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Updates the title and description of an existing task list.
    ///
    /// Tasks and the creation timestamp are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Validation`] when the body has no id, an id
    /// different from `id`, or an empty title;
    /// [`TrackingError::TaskListNotFound`] when no list has `id`; or
    /// [`TrackingError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskListId, task_list: TaskList) -> TrackingResult<TaskList> {
        debug!(task_list_id = %id, "updating task list");
        let Some(body_id) = task_list.id() else {
            return Err(rejected(ValidationError::MissingTaskListId));
        };
        if body_id != id {
            return Err(rejected(ValidationError::TaskListIdMismatch {
                path: id,
                body: body_id,
            }));
        }
        if task_list.title().is_empty() {
            return Err(rejected(ValidationError::EmptyTaskListTitle));
        }

        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            warn!(task_list_id = %id, "task list not found for update");
            return Err(TrackingError::TaskListNotFound(id));
        };
        existing.apply_changes(task_list, &*self.clock);
        let updated = self.repository.save(existing).await?;
        info!(task_list_id = %id, "updated task list");
        Ok(updated)
    }

    /// Deletes a task list. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskListId) -> TrackingResult<()> {
        self.repository.delete_by_id(id).await?;
        info!(task_list_id = %id, "deleted task list");
        Ok(())
    }
}

fn rejected(err: ValidationError) -> TrackingError {
    warn!(error = %err, "rejected task list request");
    err.into()
}
