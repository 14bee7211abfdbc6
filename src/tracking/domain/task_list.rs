//! Task list entity and its derived aggregate fields.

use super::{Task, TaskListId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A named collection of tasks.
///
/// `tasks` distinguishes "not loaded or not provided" (`None`) from "loaded
/// and empty" (`Some` of an empty vector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    id: Option<TaskListId>,
    title: String,
    description: Option<String>,
    tasks: Option<Vec<Task>>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl TaskList {
    /// Creates an unpersisted task list with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            tasks: None,
            created: None,
            updated: None,
        }
    }

    /// Sets the task list identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskListId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the task list description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an ordered task collection.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Sets both lifecycle timestamps, as read back from storage.
    #[must_use]
    pub const fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self.updated = Some(updated);
        self
    }

    /// Detaches and returns the task collection, leaving it unset.
    pub const fn take_tasks(&mut self) -> Option<Vec<Task>> {
        self.tasks.take()
    }

    /// Returns the task list identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskListId> {
        self.id
    }

    /// Returns the task list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task list description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task collection, if present.
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        self.tasks.as_deref()
    }

    /// Returns the creation timestamp, if persisted.
    #[must_use]
    pub const fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Returns the latest modification timestamp, if persisted.
    #[must_use]
    pub const fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    /// Number of tasks in the list, `0` when the collection is absent.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks().map_or(0, <[Task]>::len)
    }

    /// Fraction of tasks that are closed.
    ///
    /// Returns `0.0` when the collection is absent or empty.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "progress is a ratio of two task counts"
    )]
    pub fn progress(&self) -> f64 {
        let Some(tasks) = self.tasks().filter(|tasks| !tasks.is_empty()) else {
            return 0.0;
        };
        let closed = tasks.iter().filter(|task| task.is_closed()).count();
        closed as f64 / tasks.len() as f64
    }

    /// Sets both timestamps to the same clock reading.
    pub(crate) fn stamp_created(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.created = Some(now);
        self.updated = Some(now);
    }

    /// Overwrites title and description and refreshes `updated`.
    ///
    /// Identity, tasks and `created` are left untouched.
    pub(crate) fn apply_changes(&mut self, changes: Self, clock: &impl Clock) {
        self.title = changes.title;
        self.description = changes.description;
        self.updated = Some(clock.utc());
    }
}
