//! Error types for tracking domain validation and parsing.

use super::{TaskId, TaskListId};
use thiserror::Error;

/// Caller-supplied data that violates a service precondition.
///
/// Validation always happens before any repository call, so a rejected
/// request never leaves partial state behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A task list submitted for creation already carries an identifier.
    #[error("task list id is already set: {0}")]
    TaskListIdAlreadySet(TaskListId),

    /// The task list title is empty.
    #[error("task list title must not be empty")]
    EmptyTaskListTitle,

    /// A task list submitted for update carries no identifier.
    #[error("task list must have an id")]
    MissingTaskListId,

    /// The body identifier differs from the path identifier.
    #[error("task list id {body} does not match requested id {path}")]
    TaskListIdMismatch {
        /// Identifier addressed by the request path.
        path: TaskListId,
        /// Identifier carried by the request body.
        body: TaskListId,
    },

    /// A task submitted for creation already carries an identifier.
    #[error("task id is already set: {0}")]
    TaskIdAlreadySet(TaskId),

    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A task submitted for update carries no identifier.
    #[error("task must have an id")]
    MissingTaskId,

    /// The body identifier differs from the path identifier.
    #[error("task id {body} does not match requested id {path}")]
    TaskIdMismatch {
        /// Identifier addressed by the request path.
        path: TaskId,
        /// Identifier carried by the request body.
        body: TaskId,
    },

    /// A task update omitted the priority.
    #[error("task priority must be provided")]
    MissingPriority,

    /// A task update omitted the status.
    #[error("task status must be provided")]
    MissingStatus,
}

/// Error returned while parsing a task status name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
