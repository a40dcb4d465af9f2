//! Then steps for board drag BDD scenarios.

use super::world::{BoardWorld, id_list, run_async, task_id};
use rstest_bdd_macros::then;
use taskboard::board::{domain::TaskStatus, ports::TaskStore};

fn parse_column(column: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::from_column_id(column).ok_or_else(|| eyre::eyre!("unknown column {column:?}"))
}

#[then(r#"task "{id}" is in the "{column}" column"#)]
fn task_is_in_column(world: &BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let task = world
        .board
        .find(&task_id(&id)?)
        .ok_or_else(|| eyre::eyre!("task {id} missing from board"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the "{column}" column lists "{ids}""#)]
fn column_lists(world: &BoardWorld, column: String, ids: String) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    let listed: Vec<String> = world
        .board
        .partitions()
        .get(status)
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    let expected = id_list(&ids);
    eyre::ensure!(listed == expected, "expected {expected:?}, found {listed:?}");
    Ok(())
}

#[then(r#"the stored status of task "{id}" is "{column}""#)]
fn stored_status_is(world: &BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&column)?;
    let wanted = task_id(&id)?;
    let stored = run_async(world.store.list(&world.owner))?;
    let task = stored
        .iter()
        .find(|task| task.id() == &wanted)
        .ok_or_else(|| eyre::eyre!("task {id} missing from store"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected stored {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the notification reads "{message}""#)]
fn notification_reads(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let latest = world
        .notifier
        .latest()
        .ok_or_else(|| eyre::eyre!("no notification was shown"))?;
    eyre::ensure!(
        latest.message == message,
        "expected {message:?}, found {:?}",
        latest.message
    );
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &BoardWorld) -> Result<(), eyre::Report> {
    let received = world.notifier.received();
    eyre::ensure!(received.is_empty(), "unexpected notifications {received:?}");
    Ok(())
}

#[then("the drag is ignored")]
fn drag_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no drag was performed"))?;
    eyre::ensure!(
        report.outcome.is_no_op(),
        "expected a no-op, got {:?}",
        report.outcome
    );
    Ok(())
}
