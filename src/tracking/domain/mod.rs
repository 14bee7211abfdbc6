//! Domain model for task tracking.
//!
//! Task lists own an ordered collection of tasks; tasks point back at their
//! list by identifier. Entities carry no identifier until persisted, and
//! their timestamps are assigned by the services rather than by callers.

mod error;
mod ids;
mod status;
mod task;
mod task_list;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, ValidationError};
pub use ids::{TaskId, TaskListId};
pub use status::{TaskPriority, TaskStatus};
pub use task::Task;
pub use task_list::TaskList;
