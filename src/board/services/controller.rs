//! Board controller owning the canonical task list of a session.
//!
//! Drag gestures are applied optimistically: [`BoardController::apply_drag`]
//! replaces the canonical list synchronously, and only then does
//! [`BoardController::commit`] call the store. A failed commit is reported
//! through the [`Notifier`] and leaves the local list as it is, so the board
//! may run ahead of the store until the next [`BoardController::load`].

use crate::board::{
    domain::{
        DragEvent, DragOutcome, NewTask, Partitions, Reconciliation, StatusChange, StatusFilter,
        Task, TaskDraft, TaskId, TaskPatch, TaskStatus, UserId, filter_by_status, order_by_hint,
        partition, reconcile_with,
    },
    ports::{Notification, Notifier, SessionProvider, TaskStore, TaskStoreError, TaskStoreResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::{BoardConfig, messages};

/// Service-level errors for board operations other than drag commits.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The initial task list could not be fetched.
    #[error("failed to load tasks: {0}")]
    Load(#[source] TaskStoreError),
    /// A store mutation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Outcome of an operation that requires a signed-in user.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<T> {
    /// The operation ran.
    Applied(T),
    /// Nobody is signed in, so nothing was done.
    NoSession,
}

impl<T> Gated<T> {
    /// Returns the value when the operation ran.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::NoSession => None,
        }
    }

    /// Returns `true` when the operation ran.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Store write still owed after an optimistic drag.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCommit {
    /// Nothing needs persisting.
    Nothing,
    /// A task moved to another column.
    Status(StatusChange),
    /// A task moved to another column while order hints are persisted.
    ///
    /// The status and the hints of the whole destination column are written
    /// in one batch.
    Move {
        /// The status change of the moved task.
        change: StatusChange,
        /// Order patch for every task in the destination column; the moved
        /// task's patch also carries its new status.
        updates: Vec<(TaskId, TaskPatch)>,
    },
    /// A column was reordered and its `order` hints must be written.
    Order {
        /// Column that was reordered.
        status: TaskStatus,
        /// Order patch for every task in the column.
        updates: Vec<(TaskId, TaskPatch)>,
    },
}

/// Result of persisting a [`PendingCommit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    /// The drag changed nothing that is persisted.
    NotRequired,
    /// The store accepted the change.
    Persisted,
    /// The store rejected the change; the local list was kept.
    Failed,
    /// Nobody is signed in, so the change stays local.
    NoSession,
}

/// Everything that happened for one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEndReport {
    /// What the drag did to the board.
    pub outcome: DragOutcome,
    /// Whether the change reached the store.
    pub commit: CommitStatus,
}

/// Owner of the canonical task list for one signed-in session.
pub struct BoardController<S, P, N, C>
where
    S: TaskStore,
    P: SessionProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    session: Arc<P>,
    notifier: Arc<N>,
    clock: Arc<C>,
    config: BoardConfig,
    tasks: Vec<Task>,
}

impl<S, P, N, C> BoardController<S, P, N, C>
where
    S: TaskStore,
    P: SessionProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty board and default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, session: Arc<P>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            session,
            notifier,
            clock,
            config: BoardConfig::default(),
            tasks: Vec::new(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the canonical task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task on the board.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the board columns.
    #[must_use]
    pub fn partitions(&self) -> Partitions<'_> {
        partition(&self.tasks)
    }

    /// Returns the tasks shown by the list view under `filter`.
    #[must_use]
    pub fn filtered(&self, filter: StatusFilter) -> Vec<&Task> {
        filter_by_status(&self.tasks, filter)
    }

    /// Replaces the board with the signed-in user's stored tasks.
    ///
    /// Each column is sorted by its `order` hints, with unhinted tasks after
    /// the hinted ones in store order. Without a session the board is emptied. On failure the board is also
    /// emptied rather than left stale, and an error notification is shown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] when the store cannot list tasks.
    pub async fn load(&mut self) -> BoardResult<Gated<usize>> {
        let Some(user) = self.session.current_user() else {
            self.tasks.clear();
            return Ok(Gated::NoSession);
        };
        match self.store.list(&user).await {
            Ok(tasks) => {
                tracing::info!(user_id = %user, count = tasks.len(), "loaded tasks");
                self.tasks = order_by_hint(tasks);
                Ok(Gated::Applied(self.tasks.len()))
            }
            Err(err) => {
                self.tasks.clear();
                tracing::warn!(user_id = %user, error = %err, "failed to load tasks");
                self.notifier.notify(Notification::error(messages::LOAD_FAILED));
                Err(BoardError::Load(err))
            }
        }
    }

    /// Applies a drag to the canonical list and returns the store write it
    /// still owes.
    ///
    /// The list is replaced before this returns, so the board reflects the
    /// drag regardless of store latency. Without a session the board is left
    /// untouched.
    pub fn apply_drag(&mut self, event: &DragEvent) -> Gated<(DragOutcome, PendingCommit)> {
        if self.session.current_user().is_none() {
            tracing::debug!(task_id = %event.active(), "drag ignored without a session");
            return Gated::NoSession;
        }
        let Reconciliation { mut tasks, outcome } =
            reconcile_with(&self.tasks, event, self.config.cross_move_placement);

        let pending = match &outcome {
            DragOutcome::NoOp(reason) => {
                tracing::debug!(task_id = %event.active(), ?reason, "drag ignored");
                PendingCommit::Nothing
            }
            DragOutcome::StatusChanged(change) => {
                tracing::debug!(task_id = %change.task_id, status = %change.status, "task moved");
                if let Some(task) = tasks.iter_mut().find(|task| task.id() == &change.task_id) {
                    task.touch(&*self.clock);
                }
                if self.config.persist_reorders {
                    PendingCommit::Move {
                        change: change.clone(),
                        updates: moved_column_updates(&mut tasks, change, &*self.clock),
                    }
                } else {
                    PendingCommit::Status(change.clone())
                }
            }
            DragOutcome::Reordered { status, from, to } => {
                tracing::debug!(task_id = %event.active(), %status, from, to, "task reordered");
                if self.config.persist_reorders {
                    PendingCommit::Order {
                        status: *status,
                        updates: assign_order(&mut tasks, *status, &*self.clock),
                    }
                } else {
                    PendingCommit::Nothing
                }
            }
        };

        self.tasks = tasks;
        Gated::Applied((outcome, pending))
    }

    /// Persists the write owed by [`Self::apply_drag`].
    ///
    /// Never fails: store errors become an error notification and
    /// [`CommitStatus::Failed`], and the optimistic list is kept.
    pub async fn commit(&self, pending: PendingCommit) -> CommitStatus {
        if pending == PendingCommit::Nothing {
            return CommitStatus::NotRequired;
        }
        let Some(user) = self.session.current_user() else {
            return CommitStatus::NoSession;
        };

        match pending {
            PendingCommit::Nothing => CommitStatus::NotRequired,
            PendingCommit::Status(change) => self.commit_status(&user, &change).await,
            PendingCommit::Move { change, updates } => {
                self.commit_move(&user, &change, &updates).await
            }
            PendingCommit::Order { status, updates } => {
                self.commit_order(&user, status, &updates).await
            }
        }
    }

    async fn commit_status(&self, user: &UserId, change: &StatusChange) -> CommitStatus {
        let patch = TaskPatch::status_change(change.status);
        let result = self.store.update(user, &change.task_id, &patch).await;
        self.finish_status_commit(change, &result)
    }

    async fn commit_move(
        &self,
        user: &UserId,
        change: &StatusChange,
        updates: &[(TaskId, TaskPatch)],
    ) -> CommitStatus {
        let result = self.store.batch_update(user, updates).await;
        self.finish_status_commit(change, &result)
    }

    fn finish_status_commit(
        &self,
        change: &StatusChange,
        result: &TaskStoreResult<()>,
    ) -> CommitStatus {
        match result {
            Ok(()) => {
                tracing::info!(task_id = %change.task_id, status = %change.status, "status persisted");
                self.notify_success(messages::STATUS_UPDATED);
                CommitStatus::Persisted
            }
            Err(err) => {
                tracing::warn!(
                    task_id = %change.task_id,
                    status = %change.status,
                    error = %err,
                    "status change not persisted; board is ahead of the store"
                );
                self.notifier
                    .notify(Notification::error(messages::STATUS_UPDATE_FAILED));
                CommitStatus::Failed
            }
        }
    }

    async fn commit_order(
        &self,
        user: &UserId,
        status: TaskStatus,
        updates: &[(TaskId, TaskPatch)],
    ) -> CommitStatus {
        match self.store.batch_update(user, updates).await {
            Ok(()) => {
                tracing::info!(%status, count = updates.len(), "column order persisted");
                CommitStatus::Persisted
            }
            Err(err) => {
                tracing::warn!(
                    %status,
                    error = %err,
                    "column order not persisted; board is ahead of the store"
                );
                self.notifier
                    .notify(Notification::error(messages::ORDER_UPDATE_FAILED));
                CommitStatus::Failed
            }
        }
    }

    /// Handles a finished drag: optimistic apply, then commit.
    pub async fn handle_drag_end(&mut self, event: &DragEvent) -> Gated<DragEndReport> {
        let Gated::Applied((outcome, pending)) = self.apply_drag(event) else {
            return Gated::NoSession;
        };
        let commit = self.commit(pending).await;
        Gated::Applied(DragEndReport { outcome, commit })
    }

    /// Stores a new task and appends it to the board with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store rejects the task; the
    /// board is left unchanged.
    pub async fn add_task(&mut self, draft: TaskDraft) -> BoardResult<Gated<Task>> {
        let Some(user) = self.session.current_user() else {
            return Ok(Gated::NoSession);
        };
        let new_task = NewTask::new(user.clone(), draft, &*self.clock);
        let created = self
            .store
            .create(&user, new_task)
            .await
            .map_err(|err| self.report_failure(messages::ADD_FAILED, err))?;

        tracing::info!(task_id = %created.id(), "task added");
        self.tasks.push(created.clone());
        self.notify_success(messages::TASK_ADDED);
        Ok(Gated::Applied(created))
    }

    /// Stores a partial update, then merges it into the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store rejects the update; the
    /// board is left unchanged.
    pub async fn edit_task(&mut self, id: &TaskId, patch: TaskPatch) -> BoardResult<Gated<()>> {
        let Some(user) = self.session.current_user() else {
            return Ok(Gated::NoSession);
        };
        self.store
            .update(&user, id, &patch)
            .await
            .map_err(|err| self.report_failure(messages::UPDATE_FAILED, err))?;

        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.apply_patch(&patch, &*self.clock);
        }
        tracing::info!(task_id = %id, "task updated");
        self.notify_success(messages::TASK_UPDATED);
        Ok(Gated::Applied(()))
    }

    /// Deletes a task from the store, then removes it from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store rejects the delete; the
    /// board is left unchanged.
    pub async fn delete_task(&mut self, id: &TaskId) -> BoardResult<Gated<()>> {
        let Some(user) = self.session.current_user() else {
            return Ok(Gated::NoSession);
        };
        self.store
            .delete(&user, id)
            .await
            .map_err(|err| self.report_failure(messages::DELETE_FAILED, err))?;

        self.tasks.retain(|task| task.id() != id);
        tracing::info!(task_id = %id, "task deleted");
        self.notify_success(messages::TASK_DELETED);
        Ok(Gated::Applied(()))
    }

    fn notify_success(&self, message: &str) {
        if self.config.notify_success {
            self.notifier.notify(Notification::success(message));
        }
    }

    fn report_failure(&self, message: &str, err: TaskStoreError) -> BoardError {
        tracing::warn!(error = %err, "{message}");
        self.notifier.notify(Notification::error(message));
        BoardError::Store(err)
    }
}

/// Writes `order = index` for every task in `status`, in board order, and
/// returns the matching store patches.
fn assign_order(
    tasks: &mut [Task],
    status: TaskStatus,
    clock: &impl Clock,
) -> Vec<(TaskId, TaskPatch)> {
    tasks
        .iter_mut()
        .filter(|task| task.status() == status)
        .zip(0_u32..)
        .map(|(task, order)| {
            let patch = TaskPatch::reorder(order);
            task.apply_patch(&patch, clock);
            (task.id().clone(), patch)
        })
        .collect()
}

/// Writes order hints across the column a task moved into and folds the new
/// status into the moved task's patch.
fn moved_column_updates(
    tasks: &mut [Task],
    change: &StatusChange,
    clock: &impl Clock,
) -> Vec<(TaskId, TaskPatch)> {
    assign_order(tasks, change.status, clock)
        .into_iter()
        .map(|(id, patch)| {
            if id == change.task_id {
                (id, patch.with_status(change.status))
            } else {
                (id, patch)
            }
        })
        .collect()
}
