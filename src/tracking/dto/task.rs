//! Transfer shape for tasks.

use crate::tracking::domain::{TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of a task.
///
/// Internal fields (owning list, timestamps) are not part of this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier; absent before creation.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Task priority.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Task status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}
