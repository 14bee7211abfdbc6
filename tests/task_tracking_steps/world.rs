//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::tracking::{
    adapters::memory::InMemoryTrackingStore,
    domain::{Task, TaskListId},
    services::{TaskListService, TaskService, TrackingError},
};

/// Task list service type used by the BDD world.
pub type TestTaskListService = TaskListService<InMemoryTrackingStore, DefaultClock>;

/// Task service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTrackingStore, InMemoryTrackingStore, DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TrackingWorld {
    pub task_lists: TestTaskListService,
    pub tasks: TestTaskService,
    pub task_list_id: Option<TaskListId>,
    pub last_task: Option<Task>,
    pub last_error: Option<TrackingError>,
}

impl TrackingWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTrackingStore::new());
        let clock = Arc::new(DefaultClock);

        Self {
            task_lists: TaskListService::new(Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), store, clock),
            task_list_id: None,
            last_task: None,
            last_error: None,
        }
    }

    /// Returns the task list created by an earlier step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task list id was recorded.
    pub fn task_list_id(&self) -> Result<TaskListId, eyre::Report> {
        self.task_list_id
            .ok_or_else(|| eyre::eyre!("missing task list id in scenario world"))
    }

    /// Returns the task created or updated by an earlier step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was recorded.
    pub fn last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records the outcome of a task operation.
    pub fn record(&mut self, result: Result<Task, TrackingError>) {
        match result {
            Ok(task) => self.last_task = Some(task),
            Err(err) => self.last_error = Some(err),
        }
    }
}

impl Default for TrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackingWorld {
    TrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
