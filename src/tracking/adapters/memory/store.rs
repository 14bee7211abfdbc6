//! In-memory store for task lists and tasks.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tracking::{
    domain::{Task, TaskId, TaskList, TaskListId},
    ports::{RepositoryError, RepositoryResult, TaskListRepository, TaskRepository},
};

/// Thread-safe in-memory store implementing both tracking repositories.
///
/// Rows are kept in insertion order. Task lists are stored without their
/// task collection and hydrated from the task rows on every read, so a
/// list always reflects its current tasks. Deleting a list leaves its tasks
/// in place.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackingStore {
    state: Arc<RwLock<InMemoryTrackingState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackingState {
    task_lists: Vec<TaskList>,
    tasks: Vec<Task>,
}

impl InMemoryTrackingStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryTrackingState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryTrackingState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl InMemoryTrackingState {
    fn tasks_of(&self, task_list_id: TaskListId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.task_list_id() == Some(task_list_id))
            .cloned()
            .collect()
    }

    fn hydrate(&self, task_list: &TaskList) -> TaskList {
        let tasks = task_list
            .id()
            .map(|id| self.tasks_of(id))
            .unwrap_or_default();
        task_list.clone().with_tasks(tasks)
    }
}

fn belongs_to(task: &Task, task_list_id: TaskListId, task_id: TaskId) -> bool {
    task.id() == Some(task_id) && task.task_list_id() == Some(task_list_id)
}

#[async_trait]
impl TaskListRepository for InMemoryTrackingStore {
    async fn find_all(&self) -> RepositoryResult<Vec<TaskList>> {
        let state = self.read()?;
        Ok(state
            .task_lists
            .iter()
            .map(|task_list| state.hydrate(task_list))
            .collect())
    }

    async fn find_by_id(&self, id: TaskListId) -> RepositoryResult<Option<TaskList>> {
        let state = self.read()?;
        Ok(state
            .task_lists
            .iter()
            .find(|task_list| task_list.id() == Some(id))
            .map(|task_list| state.hydrate(task_list)))
    }

    async fn save(&self, task_list: TaskList) -> RepositoryResult<TaskList> {
        let mut state = self.write()?;
        let id = task_list.id().unwrap_or_default();
        let mut row = task_list.with_id(id);
        // Tasks are persisted through the task repository only.
        drop(row.take_tasks());

        match state
            .task_lists
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
        {
            Some(existing) => *existing = row.clone(),
            None => state.task_lists.push(row.clone()),
        }
        Ok(state.hydrate(&row))
    }

    async fn delete_by_id(&self, id: TaskListId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        state.task_lists.retain(|task_list| task_list.id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTrackingStore {
    async fn find_by_task_list_id(&self, task_list_id: TaskListId) -> RepositoryResult<Vec<Task>> {
        Ok(self.read()?.tasks_of(task_list_id))
    }

    async fn find_by_task_list_id_and_id(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> RepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .find(|task| belongs_to(task, task_list_id, task_id))
            .cloned())
    }

    async fn save(&self, task: Task) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        let id = task.id().unwrap_or_default();
        let row = task.with_id(id);

        match state.tasks.iter_mut().find(|existing| existing.id() == Some(id)) {
            Some(existing) => *existing = row.clone(),
            None => state.tasks.push(row.clone()),
        }
        Ok(row)
    }

    async fn delete_by_task_list_id_and_id(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> RepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .retain(|task| !belongs_to(task, task_list_id, task_id));
        Ok(())
    }
}
