//! Domain model for the task board.
//!
//! The board domain models tasks, their status columns, and the pure
//! reconciliation of drag gestures, keeping storage and presentation
//! concerns outside of the domain boundary.

mod draft;
pub mod drag;
mod error;
mod fields;
mod ids;
pub mod partition;
mod task;

pub use drag::{
    CrossMovePlacement, DragEvent, DragOutcome, DropTarget, NoOpReason, Reconciliation,
    StatusChange, reconcile, reconcile_with,
};
pub use draft::{NewTask, TaskDraft, TaskPatch};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use fields::{TaskTitle, TimeEstimate};
pub use ids::{TaskId, UserId};
pub use partition::{Partitions, StatusFilter, filter_by_status, order_by_hint, partition};
pub use task::{PersistedTaskData, Task, TaskStatus};
