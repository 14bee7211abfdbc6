//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the tracking
//! services.

pub mod repository;

pub use repository::{RepositoryError, RepositoryResult, TaskListRepository, TaskRepository};

#[cfg(test)]
pub use repository::{MockTaskListRepository, MockTaskRepository};
