//! Service-level errors for task tracking operations.

use crate::tracking::{
    domain::{TaskId, TaskListId, ValidationError},
    ports::RepositoryError,
};
use thiserror::Error;

/// Errors raised by the tracking services.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Caller-supplied data violated a precondition.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed task list does not exist.
    #[error("task list not found: {0}")]
    TaskListNotFound(TaskListId),

    /// No task with the given id belongs to the given task list.
    #[error("task {task_id} not found in task list {task_list_id}")]
    TaskNotFound {
        /// Owning task list identifier.
        task_list_id: TaskListId,
        /// Task identifier.
        task_id: TaskId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TrackingError {
    /// Returns `true` for precondition failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` when a required entity was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskListNotFound(_) | Self::TaskNotFound { .. })
    }
}

/// Result type for tracking service operations.
pub type TrackingResult<T> = Result<T, TrackingError>;
