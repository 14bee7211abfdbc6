//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use tasktrack::{
    telemetry::{TelemetryConfig, init_tracing},
    tracking::{
        adapters::memory::InMemoryTrackingStore,
        dto::{TaskDto, TaskListDto},
        services::{TaskListService, TaskService},
    },
};

/// Task list service backed by the in-memory store.
pub type TestTaskListService = TaskListService<InMemoryTrackingStore, DefaultClock>;

/// Task service backed by the in-memory store.
pub type TestTaskService = TaskService<InMemoryTrackingStore, InMemoryTrackingStore, DefaultClock>;

/// Both services sharing one store, as a routing layer would wire them.
pub struct Services {
    /// Task list operations.
    pub task_lists: TestTaskListService,
    /// Task operations.
    pub tasks: TestTaskService,
}

/// Provides services over a fresh store for each test.
#[fixture]
pub fn services() -> Services {
    // Another test may already have installed the subscriber.
    drop(init_tracing(
        &TelemetryConfig::from_env().with_test_writer(true),
    ));

    let store = Arc::new(InMemoryTrackingStore::new());
    let clock = Arc::new(DefaultClock);
    Services {
        task_lists: TaskListService::new(Arc::clone(&store), Arc::clone(&clock)),
        tasks: TaskService::new(Arc::clone(&store), store, clock),
    }
}

/// Builds a task list creation payload.
#[must_use]
pub fn new_task_list(title: &str) -> TaskListDto {
    TaskListDto {
        title: Some(title.to_owned()),
        ..TaskListDto::default()
    }
}

/// Builds a task creation payload.
#[must_use]
pub fn new_task(title: &str) -> TaskDto {
    TaskDto {
        title: Some(title.to_owned()),
        ..TaskDto::default()
    }
}
