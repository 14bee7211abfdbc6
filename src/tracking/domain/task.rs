//! Task entity.

use super::{TaskId, TaskListId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A unit of work belonging to a task list.
///
/// A task that has not been persisted yet has no identifier. The owning list
/// is referenced by identifier only; the task never owns the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    task_list_id: Option<TaskListId>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an unpersisted task with the given title and no other fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            status: None,
            priority: None,
            task_list_id: None,
            created: None,
            updated: None,
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the owning task list reference.
    #[must_use]
    pub const fn with_task_list_id(mut self, task_list_id: TaskListId) -> Self {
        self.task_list_id = Some(task_list_id);
        self
    }

    /// Sets both lifecycle timestamps, as read back from storage.
    #[must_use]
    pub const fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self.updated = Some(updated);
        self
    }

    /// Returns the task identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the task status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the task priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the owning task list identifier, if attached.
    #[must_use]
    pub const fn task_list_id(&self) -> Option<TaskListId> {
        self.task_list_id
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

    /// Returns `true` when the task status is [`TaskStatus::Closed`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == Some(TaskStatus::Closed)
    }

    /// Sets both timestamps to the same clock reading.
    pub(crate) fn stamp_created(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.created = Some(now);
        self.updated = Some(now);
    }

    /// Overwrites the caller-editable fields and refreshes `updated`.
    ///
    /// Identity, owning list and `created` are left untouched.
    pub(crate) fn apply_changes(&mut self, changes: Self, clock: &impl Clock) {
        self.title = changes.title;
        self.description = changes.description;
        self.due_date = changes.due_date;
        self.status = changes.status;
        self.priority = changes.priority;
        self.updated = Some(clock.utc());
    }
}
