//! Splitting a flat task list into ordered status columns.

use super::{Task, TaskStatus};

/// Tasks grouped by status, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions<'a> {
    /// Tasks in [`TaskStatus::ToDo`].
    pub todo: Vec<&'a Task>,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: Vec<&'a Task>,
    /// Tasks in [`TaskStatus::Done`].
    pub done: Vec<&'a Task>,
}

impl<'a> Partitions<'a> {
    /// Returns the column for `status`.
    #[must_use]
    pub fn get(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::ToDo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the total number of partitioned tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenates the columns in board order.
    #[must_use]
    pub fn into_flat(self) -> Vec<&'a Task> {
        let mut flat = self.todo;
        flat.extend(self.in_progress);
        flat.extend(self.done);
        flat
    }
}

/// Splits `tasks` into the three status columns in a single pass.
#[must_use]
pub fn partition(tasks: &[Task]) -> Partitions<'_> {
    let mut partitions = Partitions::default();
    for task in tasks {
        match task.status() {
            TaskStatus::ToDo => partitions.todo.push(task),
            TaskStatus::InProgress => partitions.in_progress.push(task),
            TaskStatus::Done => partitions.done.push(task),
        }
    }
    partitions
}

/// Sorts each status column by its `order` hints while keeping the slots
/// every column occupies in the flat list.
///
/// Hinted tasks come first, by ascending hint; tasks without a hint follow
/// in list order. Equal hints keep their list order.
#[must_use]
pub fn order_by_hint(tasks: Vec<Task>) -> Vec<Task> {
    let layout: Vec<TaskStatus> = tasks.iter().map(Task::status).collect();
    let (mut todo, mut in_progress, mut done) = (Vec::new(), Vec::new(), Vec::new());
    for task in tasks {
        match task.status() {
            TaskStatus::ToDo => todo.push(task),
            TaskStatus::InProgress => in_progress.push(task),
            TaskStatus::Done => done.push(task),
        }
    }
    for column in [&mut todo, &mut in_progress, &mut done] {
        column.sort_by_key(hint_key);
    }

    let mut todo_slots = todo.into_iter();
    let mut in_progress_slots = in_progress.into_iter();
    let mut done_slots = done.into_iter();
    layout
        .into_iter()
        .filter_map(|status| match status {
            TaskStatus::ToDo => todo_slots.next(),
            TaskStatus::InProgress => in_progress_slots.next(),
            TaskStatus::Done => done_slots.next(),
        })
        .collect()
}

fn hint_key(task: &Task) -> (bool, u32) {
    (task.order().is_none(), task.order().unwrap_or_default())
}

/// Status filter applied to the list view of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks with the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when `task` passes the filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => task.status() == status,
        }
    }
}

/// Returns the tasks passing `filter`, preserving input order.
#[must_use]
pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
