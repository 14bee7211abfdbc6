//! Transfer shape for task lists.

use super::TaskDto;
use crate::tracking::domain::TaskListId;
use serde::{Deserialize, Serialize};

/// Wire representation of a task list.
///
/// `count` and `progress` are derived on the way out and ignored on the way
/// in. `tasks` is `None` when no sub-collection was supplied, which is not the
/// same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListDto {
    /// Task list identifier; absent before creation.
    #[serde(default)]
    pub id: Option<TaskListId>,
    /// Task list title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of tasks in the list.
    #[serde(default)]
    pub count: usize,
    /// Fraction of closed tasks in `[0.0, 1.0]`.
    #[serde(default)]
    pub progress: f64,
    /// Tasks in list order.
    #[serde(default)]
    pub tasks: Option<Vec<TaskDto>>,
}
