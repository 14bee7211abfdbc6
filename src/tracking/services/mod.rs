//! Application services for task tracking.

mod error;
mod task;
mod task_list;

pub use error::{TrackingError, TrackingResult};
pub use task::TaskService;
pub use task_list::TaskListService;
