//! Validated scalar fields carried by tasks.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Estimated effort expressed as whole hours plus minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeEstimate")]
pub struct TimeEstimate {
    hours: u32,
    minutes: u32,
}

#[derive(Deserialize)]
struct RawTimeEstimate {
    hours: u32,
    minutes: u32,
}

impl TimeEstimate {
    /// Largest valid minutes component.
    pub const MAX_MINUTES: u32 = 59;

    /// Creates a validated estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MinutesOutOfRange`] when `minutes` exceeds
    /// [`Self::MAX_MINUTES`].
    pub const fn new(hours: u32, minutes: u32) -> Result<Self, TaskDomainError> {
        if minutes > Self::MAX_MINUTES {
            return Err(TaskDomainError::MinutesOutOfRange(minutes));
        }
        Ok(Self { hours, minutes })
    }

    /// Returns the hours component.
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.hours
    }

    /// Returns the minutes component.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// Returns the estimate in minutes.
    #[must_use]
    pub fn total_minutes(self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

impl TryFrom<RawTimeEstimate> for TimeEstimate {
    type Error = TaskDomainError;

    fn try_from(raw: RawTimeEstimate) -> Result<Self, Self::Error> {
        Self::new(raw.hours, raw.minutes)
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
