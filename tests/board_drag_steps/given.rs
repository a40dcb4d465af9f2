//! Given steps for board drag BDD scenarios.

use super::world::{BoardWorld, id_list, run_async, task_id};
use eyre::WrapErr;
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::{PersistedTaskData, Task, TaskStatus, TaskTitle, TimeEstimate},
    ports::TaskStore,
};

#[given(r#"the tasks "{ids}" are stored in the "{column}" column"#)]
fn tasks_stored_in_column(
    world: &mut BoardWorld,
    ids: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let timestamp = DefaultClock.utc();
    let tasks = id_list(&ids)
        .into_iter()
        .map(|raw| {
            Ok(Task::from_persisted(PersistedTaskData {
                id: task_id(&raw)?,
                user_id: world.owner.clone(),
                title: TaskTitle::new(format!("Task {raw}"))?,
                description: String::new(),
                status,
                time_estimate: TimeEstimate::default(),
                created_at: timestamp,
                updated_at: timestamp,
                order: None,
            }))
        })
        .collect::<Result<Vec<_>, eyre::Report>>()?;
    world.store.seed(tasks).wrap_err("seed scenario tasks")?;
    Ok(())
}

#[given("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let loaded = run_async(world.board.load()).wrap_err("load board for scenario")?;
    eyre::ensure!(loaded.is_applied(), "board load was gated");
    Ok(())
}

#[given(r#"task "{id}" has been deleted from the store"#)]
fn task_deleted_from_store(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    let deleted = task_id(&id)?;
    run_async(world.store.delete(&world.owner, &deleted))
        .wrap_err("delete task behind the board")?;
    Ok(())
}
