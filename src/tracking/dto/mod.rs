//! Transfer objects exchanged with the routing layer.

mod error_response;
mod task;
mod task_list;

pub use error_response::ErrorResponse;
pub use task::TaskDto;
pub use task_list::TaskListDto;
