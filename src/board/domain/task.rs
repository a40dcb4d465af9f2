//! Task aggregate and board status types.

use super::{
    NewTask, ParseTaskStatusError, TaskId, TaskPatch, TaskTitle, TimeEstimate, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task belongs to.
///
/// The set is closed: a task is always in exactly one of these columns.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the column label, which doubles as the column drop identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Resolves a drop identifier against the column labels.
    ///
    /// Only exact labels match, so task identifiers that merely resemble a
    /// status are never mistaken for a column.
    #[must_use]
    pub fn from_column_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "to do" | "todo" => Ok(Self::ToDo),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    time_estimate: TimeEstimate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order: Option<u32>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub user_id: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted time estimate.
    pub time_estimate: TimeEstimate,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted position hint, if any.
    pub order: Option<u32>,
}

impl Task {
    /// Materializes a new task once storage has assigned its identifier.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        let NewTask {
            user_id,
            draft,
            created_at,
            updated_at,
        } = new_task;
        Self {
            id,
            user_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            time_estimate: draft.time_estimate,
            created_at,
            updated_at,
            order: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            status: data.status,
            time_estimate: data.time_estimate,
            created_at: data.created_at,
            updated_at: data.updated_at,
            order: data.order,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the time estimate.
    #[must_use]
    pub const fn time_estimate(&self) -> TimeEstimate {
        self.time_estimate
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the position hint within the status partition.
    #[must_use]
    pub const fn order(&self) -> Option<u32> {
        self.order
    }

    /// Moves the task to another column without touching timestamps.
    ///
    /// Used by the drag reconciler, which has no clock; callers applying the
    /// result are responsible for [`Task::touch`].
    pub(crate) const fn relabel(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Merges the fields present in `patch` and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
        if let Some(time_estimate) = patch.time_estimate() {
            self.time_estimate = time_estimate;
        }
        if let Some(order) = patch.order() {
            self.order = Some(order);
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
