//! Repository ports for task list and task persistence.
//!
//! Each method is a single unit of work against the underlying store. The
//! services never hold state across calls, so ordering between concurrent
//! calls is whatever the implementation provides.

use crate::tracking::domain::{Task, TaskId, TaskList, TaskListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Task list persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Returns every stored task list, in storage order.
    async fn find_all(&self) -> RepositoryResult<Vec<TaskList>>;

    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the task list does not exist. A found list has
    /// its task collection loaded.
    async fn find_by_id(&self, id: TaskListId) -> RepositoryResult<Option<TaskList>>;

    /// Inserts the task list when it has no identifier, otherwise replaces
    /// the stored row. Returns the stored entity with its identifier set.
    async fn save(&self, task_list: TaskList) -> RepositoryResult<TaskList>;

    /// Removes the task list if present. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: TaskListId) -> RepositoryResult<()>;
}

/// Task persistence contract, scoped by owning task list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task referencing the given task list, in storage order.
    async fn find_by_task_list_id(&self, task_list_id: TaskListId) -> RepositoryResult<Vec<Task>>;

    /// Finds a task by compound key.
    ///
    /// Returns `None` when no task with `task_id` belongs to `task_list_id`.
    async fn find_by_task_list_id_and_id(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> RepositoryResult<Option<Task>>;

    /// Inserts the task when it has no identifier, otherwise replaces the
    /// stored row. Returns the stored entity with its identifier set.
    async fn save(&self, task: Task) -> RepositoryResult<Task>;

    /// Removes the task matching the compound key atomically, if present.
    async fn delete_by_task_list_id_and_id(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> RepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
