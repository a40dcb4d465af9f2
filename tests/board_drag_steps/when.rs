//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, run_async, task_id};
use rstest_bdd_macros::when;
use taskboard::board::domain::{DragEvent, DropTarget, TaskStatus};

fn drag(world: &mut BoardWorld, event: &DragEvent) {
    world.last_report = run_async(world.board.handle_drag_end(event)).applied();
}

#[when(r#"task "{active}" is dropped on the "{column}" column"#)]
fn dropped_on_column(
    world: &mut BoardWorld,
    active: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::from_column_id(&column)
        .ok_or_else(|| eyre::eyre!("unknown column {column:?}"))?;
    drag(world, &DragEvent::new(task_id(&active)?, DropTarget::Column(status)));
    Ok(())
}

#[when(r#"task "{active}" is dropped on task "{over}""#)]
fn dropped_on_task(
    world: &mut BoardWorld,
    active: String,
    over: String,
) -> Result<(), eyre::Report> {
    let target = DropTarget::Task(task_id(&over)?);
    drag(world, &DragEvent::new(task_id(&active)?, target));
    Ok(())
}

#[when(r#"the drag of task "{active}" is cancelled"#)]
fn drag_cancelled(world: &mut BoardWorld, active: String) -> Result<(), eyre::Report> {
    drag(world, &DragEvent::cancelled(task_id(&active)?));
    Ok(())
}
