//! User-facing notification texts.

/// Shown when the initial task list cannot be fetched.
pub const LOAD_FAILED: &str = "Failed to load tasks. Please try again later.";
/// Shown after a drag moved a task to another column.
pub const STATUS_UPDATED: &str = "Task status updated successfully";
/// Shown when a column move could not be saved.
pub const STATUS_UPDATE_FAILED: &str = "Failed to update task status. Please try again.";
/// Shown when a reorder could not be saved.
pub const ORDER_UPDATE_FAILED: &str = "Failed to save task order. Please try again.";
/// Shown after a task was created.
pub const TASK_ADDED: &str = "Task added successfully";
/// Shown when a task could not be created.
pub const ADD_FAILED: &str = "Failed to add task. Please try again.";
/// Shown after a task was edited.
pub const TASK_UPDATED: &str = "Task updated successfully";
/// Shown when an edit could not be saved.
pub const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
/// Shown after a task was deleted.
pub const TASK_DELETED: &str = "Task deleted successfully";
/// Shown when a task could not be deleted.
pub const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
