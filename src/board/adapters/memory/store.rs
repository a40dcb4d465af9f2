//! In-memory task store for tests and local sessions.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{NewTask, Task, TaskId, TaskPatch, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Each user's tasks are kept in insertion order, which is the order
/// [`TaskStore::list`] returns them in.
#[derive(Debug)]
pub struct InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<HashMap<UserId, Vec<Task>>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping updates with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    /// Seeds the store with existing tasks, bypassing id assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the store lock is
    /// poisoned.
    pub fn seed(&self, tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        for task in tasks {
            state.entry(task.user_id().clone()).or_default().push(task);
        }
        Ok(())
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<UserId, Vec<Task>>>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<UserId, Vec<Task>>>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))
    }
}

fn find_mut<'t>(tasks: &'t mut [Task], id: &TaskId) -> TaskStoreResult<&'t mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or_else(|| TaskStoreError::NotFound(id.clone()))
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self, user: &UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.get(user).cloned().unwrap_or_default())
    }

    async fn create(&self, user: &UserId, task: NewTask) -> TaskStoreResult<Task> {
        if task.user_id() != user {
            return Err(TaskStoreError::ValidationRejected(format!(
                "task owner {} does not match collection owner {user}",
                task.user_id()
            )));
        }
        let mut state = self.write()?;
        let tasks = state.entry(user.clone()).or_default();
        let mut id = TaskId::generate();
        while tasks.iter().any(|existing| existing.id() == &id) {
            id = TaskId::generate();
        }
        let created = Task::from_new(id, task);
        tasks.push(created.clone());
        Ok(created)
    }

    async fn update(&self, user: &UserId, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let tasks = state
            .get_mut(user)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        find_mut(tasks, id)?.apply_patch(patch, &*self.clock);
        Ok(())
    }

    async fn delete(&self, user: &UserId, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let tasks = state
            .get_mut(user)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        tasks.remove(index);
        Ok(())
    }

    async fn batch_update(
        &self,
        user: &UserId,
        updates: &[(TaskId, TaskPatch)],
    ) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let Some(tasks) = state.get_mut(user) else {
            return match updates.first() {
                Some((id, _)) => Err(TaskStoreError::NotFound(id.clone())),
                None => Ok(()),
            };
        };

        // Validate every id before writing anything.
        if let Some((missing, _)) = updates
            .iter()
            .find(|(id, _)| !tasks.iter().any(|task| task.id() == id))
        {
            return Err(TaskStoreError::NotFound(missing.clone()));
        }

        for (id, patch) in updates {
            find_mut(tasks, id)?.apply_patch(patch, &*self.clock);
        }
        Ok(())
    }
}
