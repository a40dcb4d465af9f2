//! In-memory integration tests for drag gestures reaching the store.

use super::helpers::{Harness, column, harness, id, owner, stored_task};
use eyre::{Report, ensure};
use rstest::rstest;
use taskboard::board::{
    domain::{CrossMovePlacement, DragEvent, DropTarget, TaskStatus},
    ports::{Notification, TaskStore},
    services::{BoardConfig, CommitStatus, Gated, messages},
};

fn seed_columns(harness: &Harness) -> Result<(), Report> {
    harness.store.seed([
        stored_task("a", TaskStatus::ToDo),
        stored_task("b", TaskStatus::ToDo),
        stored_task("c", TaskStatus::ToDo),
        stored_task("x", TaskStatus::InProgress),
        stored_task("y", TaskStatus::InProgress),
    ])?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cross_column_drop_is_persisted(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board();
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    let report = board
        .handle_drag_end(&DragEvent::new(id("b"), DropTarget::Task(id("x"))))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;

    ensure!(report.commit == CommitStatus::Persisted, "commit {:?}", report.commit);
    ensure!(
        column(board.tasks(), TaskStatus::InProgress) == ["x", "y", "b"],
        "moved task should be appended to its new column"
    );
    let stored = harness.store.list(&owner()).await?;
    let stored_b = stored
        .iter()
        .find(|task| task.id() == &id("b"))
        .ok_or_else(|| eyre::eyre!("task b missing from store"))?;
    ensure!(stored_b.status() == TaskStatus::InProgress, "status not persisted");
    ensure!(
        harness.notifier.latest() == Some(Notification::success(messages::STATUS_UPDATED)),
        "expected the status notification"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn before_target_placement_inserts_ahead_of_the_card(
    harness: Harness,
) -> Result<(), Report> {
    seed_columns(&harness)?;
    let config =
        BoardConfig::default().with_cross_move_placement(CrossMovePlacement::BeforeTarget);
    let mut board = harness.board().with_config(config);
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    let report = board
        .handle_drag_end(&DragEvent::new(id("a"), DropTarget::Task(id("y"))))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;

    ensure!(report.outcome.status_change().is_some(), "expected a status change");
    ensure!(
        column(board.tasks(), TaskStatus::InProgress) == ["x", "a", "y"],
        "moved task should sit before the card it was dropped on"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_keeps_the_optimistic_move(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board();
    ensure!(board.load().await?.is_applied(), "initial load was gated");
    harness.store.delete(&owner(), &id("c")).await?;

    let report = board
        .handle_drag_end(&DragEvent::new(id("c"), DropTarget::Column(TaskStatus::Done)))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;

    ensure!(report.commit == CommitStatus::Failed, "commit {:?}", report.commit);
    ensure!(
        column(board.tasks(), TaskStatus::Done) == ["c"],
        "board should keep the optimistic move"
    );
    ensure!(
        harness.notifier.received()
            == vec![Notification::error(messages::STATUS_UPDATE_FAILED)],
        "expected a single failure notification"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_reorder_survives_until_reload(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board();
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    let report = board
        .handle_drag_end(&DragEvent::new(id("a"), DropTarget::Task(id("c"))))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;

    ensure!(report.commit == CommitStatus::NotRequired, "reorder hit the store");
    ensure!(
        column(board.tasks(), TaskStatus::ToDo) == ["b", "c", "a"],
        "reorder not applied"
    );

    ensure!(board.load().await?.is_applied(), "reload was gated");
    ensure!(
        column(board.tasks(), TaskStatus::ToDo) == ["a", "b", "c"],
        "reload should restore the stored order"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_reorder_writes_order_hints(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board().with_config(BoardConfig::persistent_order());
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    let report = board
        .handle_drag_end(&DragEvent::new(id("c"), DropTarget::Task(id("a"))))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;

    ensure!(report.commit == CommitStatus::Persisted, "commit {:?}", report.commit);
    let stored = harness.store.list(&owner()).await?;
    let hints: Vec<(String, Option<u32>)> = stored
        .iter()
        .filter(|task| task.status() == TaskStatus::ToDo)
        .map(|task| (task.id().to_string(), task.order()))
        .collect();
    ensure!(
        hints
            == [
                ("a".to_owned(), Some(1)),
                ("b".to_owned(), Some(2)),
                ("c".to_owned(), Some(0)),
            ],
        "unexpected order hints {hints:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_reorder_survives_reload(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board().with_config(BoardConfig::persistent_order());
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    let report = board
        .handle_drag_end(&DragEvent::new(id("a"), DropTarget::Task(id("c"))))
        .await
        .applied()
        .ok_or_else(|| eyre::eyre!("drag was gated"))?;
    ensure!(report.commit == CommitStatus::Persisted, "commit {:?}", report.commit);
    let before = column(board.tasks(), TaskStatus::ToDo);

    ensure!(board.load().await?.is_applied(), "reload was gated");

    let after = column(board.tasks(), TaskStatus::ToDo);
    ensure!(
        before == after,
        "order lost on reload: before {before:?} after {after:?}"
    );
    ensure!(after == ["b", "c", "a"], "unexpected order {after:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moved_task_takes_its_place_in_the_new_column_after_reload(
    harness: Harness,
) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board().with_config(BoardConfig::persistent_order());
    ensure!(board.load().await?.is_applied(), "initial load was gated");

    for event in [
        DragEvent::new(id("c"), DropTarget::Task(id("a"))),
        DragEvent::new(id("a"), DropTarget::Column(TaskStatus::InProgress)),
    ] {
        let report = board
            .handle_drag_end(&event)
            .await
            .applied()
            .ok_or_else(|| eyre::eyre!("drag was gated"))?;
        ensure!(report.commit == CommitStatus::Persisted, "commit {:?}", report.commit);
    }
    ensure!(board.load().await?.is_applied(), "reload was gated");

    let in_progress = column(board.tasks(), TaskStatus::InProgress);
    ensure!(
        in_progress == ["x", "y", "a"],
        "moved task should stay last in its new column, found {in_progress:?}"
    );
    let todo = column(board.tasks(), TaskStatus::ToDo);
    ensure!(todo == ["c", "b"], "unexpected to-do order {todo:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_drag_changes_nothing(harness: Harness) -> Result<(), Report> {
    seed_columns(&harness)?;
    let mut board = harness.board();
    ensure!(board.load().await?.is_applied(), "initial load was gated");
    let before = board.tasks().to_vec();
    harness.session.set_user(None);

    let report = board
        .handle_drag_end(&DragEvent::new(id("a"), DropTarget::Column(TaskStatus::Done)))
        .await;

    ensure!(report == Gated::NoSession, "expected a gated drag, got {report:?}");
    ensure!(board.tasks() == before.as_slice(), "board changed without a session");
    ensure!(
        harness.notifier.received().is_empty(),
        "signed-out drag should not notify"
    );
    Ok(())
}
