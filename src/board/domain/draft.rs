//! Input shapes for creating and partially updating tasks.

use super::{TaskDomainError, TaskStatus, TaskTitle, TimeEstimate, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Validated form data for a task, before it is owned by anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub(super) title: TaskTitle,
    pub(super) description: String,
    pub(super) status: TaskStatus,
    pub(super) time_estimate: TimeEstimate,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    ///
    /// The draft starts in [`TaskStatus::ToDo`] with an empty description and
    /// a zero estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: String::new(),
            status: TaskStatus::default(),
            time_estimate: TimeEstimate::default(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the time estimate.
    #[must_use]
    pub const fn with_time_estimate(mut self, time_estimate: TimeEstimate) -> Self {
        self.time_estimate = time_estimate;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Converts the draft into a patch carrying every form field.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title),
            description: Some(self.description),
            status: Some(self.status),
            time_estimate: Some(self.time_estimate),
            order: None,
        }
    }
}

/// A task ready to be stored, lacking only its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(super) user_id: UserId,
    pub(super) draft: TaskDraft,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Stamps a draft with its owner and creation time.
    #[must_use]
    pub fn new(user_id: UserId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            user_id,
            draft,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the validated form data.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }
}

/// Partial update of task fields. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<TaskTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    #[serde(rename = "timeEstimate", skip_serializing_if = "Option::is_none")]
    time_estimate: Option<TimeEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<u32>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only moves the task to `status`.
    #[must_use]
    pub fn status_change(status: TaskStatus) -> Self {
        Self::new().with_status(status)
    }

    /// Creates a patch that only sets the position hint.
    #[must_use]
    pub fn reorder(order: u32) -> Self {
        Self::new().with_order(order)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the time estimate.
    #[must_use]
    pub const fn with_time_estimate(mut self, time_estimate: TimeEstimate) -> Self {
        self.time_estimate = Some(time_estimate);
        self
    }

    /// Sets the position hint.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns the new title, if set.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the new description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the new status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the new time estimate, if set.
    #[must_use]
    pub const fn time_estimate(&self) -> Option<TimeEstimate> {
        self.time_estimate
    }

    /// Returns the new position hint, if set.
    #[must_use]
    pub const fn order(&self) -> Option<u32> {
        self.order
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.time_estimate.is_none()
            && self.order.is_none()
    }
}
