//! Storage port for per-user task documents.

use crate::board::domain::{NewTask, Task, TaskId, TaskPatch, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote document store holding each user's tasks, keyed by task id.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every task owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] on transport failure.
    async fn list(&self, user: &UserId) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] on transport failure or
    /// [`TaskStoreError::ValidationRejected`] when the store refuses the
    /// document.
    async fn create(&self, user: &UserId, task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial update and refreshes the stored `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, user: &UserId, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;

    /// Sets the position hint of a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_order(&self, user: &UserId, id: &TaskId, order: u32) -> TaskStoreResult<()> {
        self.update(user, id, &TaskPatch::reorder(order)).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, user: &UserId, id: &TaskId) -> TaskStoreResult<()>;

    /// Applies several partial updates atomically: either all are applied or
    /// none are.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] for the first missing task, in
    /// which case nothing is written.
    async fn batch_update(
        &self,
        user: &UserId,
        updates: &[(TaskId, TaskPatch)],
    ) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The store could not be reached.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The store refused the document.
    #[error("task rejected by store: {0}")]
    ValidationRejected(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
