//! Given steps for board drag-and-drop BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, run_async};
use collabworks::auth::domain::UserId;
use collabworks::project::{
    domain::{Project, ProjectDraft, Task, TaskDraft, TaskStatus, Title},
    ports::{ProjectRepository, TaskRepository},
    services::BoardController,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a board with the task "{title}" in column "{column}""#)]
fn board_with_task(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let project = Project::new(
        ProjectDraft::new(Title::new("Website Redesign")?, UserId::new()),
        &DefaultClock,
    );
    let task = Task::new(
        TaskDraft::new(project.id(), Title::new(title)?).with_status(status),
        &DefaultClock,
    );

    run_async(async {
        world.store.inner.insert_project(&project).await?;
        world.store.inner.insert_task(&task).await
    })
    .wrap_err("seed project and task for drag scenario")?;

    let board = run_async(BoardController::open(
        Arc::new(world.store.clone()),
        Arc::clone(&world.notifier),
        Arc::new(DefaultClock),
        project.id(),
    ))
    .wrap_err("open board for drag scenario")?;
    world.board = Some(board);
    Ok(())
}

#[given("the store rejects status updates")]
fn store_rejects_status_updates(world: &mut BoardWorld) {
    world.store.reject_status_updates();
}
