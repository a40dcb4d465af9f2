//! Drag-and-drop reconciliation.
//!
//! A drag ends with the dragged task (`active`) released over a drop target
//! (`over`). The target is either a column or another task, and both share
//! one identifier space. [`reconcile`] turns the current flat task list and
//! the drag event into the next flat list plus a description of what
//! changed. It is a pure function. It only permutes tasks and relabels the
//! active task's status, so the output always holds the same tasks as the
//! input.

use super::{Task, TaskDomainError, TaskId, TaskStatus};

/// Where a drag was released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Released over a column.
    Column(TaskStatus),
    /// Released over another task card.
    Task(TaskId),
}

impl DropTarget {
    /// Resolves a raw drop identifier.
    ///
    /// Column labels are tested first; anything else is taken as a task id.
    /// Returns `None` for a blank identifier.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(status) = TaskStatus::from_column_id(raw) {
            return Some(Self::Column(status));
        }
        TaskId::new(raw).ok().map(Self::Task)
    }

    fn is_task(&self, id: &TaskId) -> bool {
        matches!(self, Self::Task(target) if target == id)
    }
}

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    active: TaskId,
    over: Option<DropTarget>,
}

impl DragEvent {
    /// Creates a drag event released over `over`.
    #[must_use]
    pub const fn new(active: TaskId, over: DropTarget) -> Self {
        Self {
            active,
            over: Some(over),
        }
    }

    /// Creates a drag event released outside any drop target.
    #[must_use]
    pub const fn cancelled(active: TaskId) -> Self {
        Self { active, over: None }
    }

    /// Builds an event from the raw identifiers reported by a drag sensor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyIdentifier`] when `active` is blank.
    pub fn from_raw(active: &str, over: Option<&str>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            active: TaskId::new(active)?,
            over: over.and_then(DropTarget::parse),
        })
    }

    /// Returns the dragged task id.
    #[must_use]
    pub const fn active(&self) -> &TaskId {
        &self.active
    }

    /// Returns the drop target, if the drag ended over one.
    #[must_use]
    pub const fn over(&self) -> Option<&DropTarget> {
        self.over.as_ref()
    }
}

/// Placement of a task moved into another column by dropping it on a card.
///
/// Column drops always append.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrossMovePlacement {
    /// Append at the end of the target column.
    #[default]
    Append,
    /// Insert immediately before the card it was dropped on.
    BeforeTarget,
}

/// Why a drag produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The drag ended outside any drop target.
    Cancelled,
    /// The task was dropped on itself.
    SameItem,
    /// The drop target names a task that is not on the board.
    InvalidDropTarget,
    /// The dragged task is not on the board.
    UnknownActive,
    /// The task was dropped on the column it already belongs to.
    SameColumn,
}

/// Status change that must be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Task whose status changed.
    pub task_id: TaskId,
    /// The new status.
    pub status: TaskStatus,
}

/// What a drag did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing changed.
    NoOp(NoOpReason),
    /// The dragged task moved to another column.
    StatusChanged(StatusChange),
    /// The dragged task moved within its column.
    Reordered {
        /// Column that was reordered.
        status: TaskStatus,
        /// Previous index within the column.
        from: usize,
        /// New index within the column.
        to: usize,
    },
}

impl DragOutcome {
    /// Returns the status change, if the drag produced one.
    #[must_use]
    pub const fn status_change(&self) -> Option<&StatusChange> {
        match self {
            Self::StatusChanged(change) => Some(change),
            Self::NoOp(_) | Self::Reordered { .. } => None,
        }
    }

    /// Returns `true` when nothing changed.
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }
}

/// Result of reconciling a drag against a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The next flat task list.
    pub tasks: Vec<Task>,
    /// What changed.
    pub outcome: DragOutcome,
}

enum Decision<'a> {
    NoOp(NoOpReason),
    CrossMove {
        status: TaskStatus,
        before: Option<&'a TaskId>,
    },
    Reorder {
        status: TaskStatus,
        target: &'a TaskId,
    },
}

/// Reconciles a drag with [`CrossMovePlacement::Append`].
#[must_use]
pub fn reconcile(tasks: &[Task], event: &DragEvent) -> Reconciliation {
    reconcile_with(tasks, event, CrossMovePlacement::default())
}

/// Reconciles a drag, placing cross-column card drops per `placement`.
#[must_use]
pub fn reconcile_with(
    tasks: &[Task],
    event: &DragEvent,
    placement: CrossMovePlacement,
) -> Reconciliation {
    let active = event.active();
    match decide(tasks, event, placement) {
        Decision::NoOp(reason) => unchanged(tasks, reason),
        Decision::CrossMove { status, before } => {
            let Some(moved) = move_across(tasks, active, status, before) else {
                return unchanged(tasks, NoOpReason::UnknownActive);
            };
            Reconciliation {
                tasks: moved,
                outcome: DragOutcome::StatusChanged(StatusChange {
                    task_id: active.clone(),
                    status,
                }),
            }
        }
        Decision::Reorder { status, target } => {
            let Some((reordered, from, to)) = reorder_within(tasks, status, active, target) else {
                return unchanged(tasks, NoOpReason::InvalidDropTarget);
            };
            Reconciliation {
                tasks: reordered,
                outcome: DragOutcome::Reordered { status, from, to },
            }
        }
    }
}

fn decide<'a>(
    tasks: &[Task],
    event: &'a DragEvent,
    placement: CrossMovePlacement,
) -> Decision<'a> {
    let Some(over) = event.over() else {
        return Decision::NoOp(NoOpReason::Cancelled);
    };
    if over.is_task(event.active()) {
        return Decision::NoOp(NoOpReason::SameItem);
    }
    let Some(active) = find(tasks, event.active()) else {
        return Decision::NoOp(NoOpReason::UnknownActive);
    };

    match over {
        DropTarget::Column(status) if *status == active.status() => {
            Decision::NoOp(NoOpReason::SameColumn)
        }
        DropTarget::Column(status) => Decision::CrossMove {
            status: *status,
            before: None,
        },
        DropTarget::Task(target_id) => match find(tasks, target_id) {
            None => Decision::NoOp(NoOpReason::InvalidDropTarget),
            Some(target) if target.status() == active.status() => Decision::Reorder {
                status: target.status(),
                target: target_id,
            },
            Some(target) => Decision::CrossMove {
                status: target.status(),
                before: match placement {
                    CrossMovePlacement::Append => None,
                    CrossMovePlacement::BeforeTarget => Some(target_id),
                },
            },
        },
    }
}

fn unchanged(tasks: &[Task], reason: NoOpReason) -> Reconciliation {
    Reconciliation {
        tasks: tasks.to_vec(),
        outcome: DragOutcome::NoOp(reason),
    }
}

fn find<'t>(tasks: &'t [Task], id: &TaskId) -> Option<&'t Task> {
    tasks.iter().find(|task| task.id() == id)
}

fn position(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

/// Relabels the active task and re-inserts it before `before`, or at the end.
fn move_across(
    tasks: &[Task],
    active: &TaskId,
    status: TaskStatus,
    before: Option<&TaskId>,
) -> Option<Vec<Task>> {
    let mut moved = tasks.to_vec();
    let from = position(&moved, active)?;
    let mut task = moved.remove(from);
    task.relabel(status);
    let at = before
        .and_then(|id| position(&moved, id))
        .unwrap_or(moved.len());
    moved.insert(at, task);
    Some(moved)
}

/// Moves `active` to `target`'s slot inside the `status` column, then
/// rebuilds the flat list as the other columns followed by that column.
fn reorder_within(
    tasks: &[Task],
    status: TaskStatus,
    active: &TaskId,
    target: &TaskId,
) -> Option<(Vec<Task>, usize, usize)> {
    let (mut column, mut rest): (Vec<Task>, Vec<Task>) = tasks
        .iter()
        .cloned()
        .partition(|task| task.status() == status);
    let from = position(&column, active)?;
    let to = position(&column, target)?;
    move_item(&mut column, from, to);
    rest.append(&mut column);
    Some((rest, from, to))
}

/// Removes the element at `from` and inserts it at `to`, shifting the
/// elements in between by one.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}
