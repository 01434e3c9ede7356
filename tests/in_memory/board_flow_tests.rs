//! Project lifecycle from the dashboard through the board.

use collabworks::navigation::Route;
use collabworks::project::{
    domain::{DragResult, DropLocation, TaskStatus},
    ports::{ProjectRepository, TaskRepository},
    services::{CatalogError, CreateProjectRequest, CreateTaskRequest, DragOutcome},
};
use eyre::{Result, ensure};
use rstest::rstest;

use super::helpers::{Catalog, Workspace, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_user_cannot_create_projects(workspace: Workspace) -> Result<()> {
    let result = workspace
        .catalog
        .create_project(CreateProjectRequest::new("Website Redesign"))
        .await;

    ensure!(matches!(result, Err(CatalogError::Unauthenticated)));
    ensure!(workspace.store.list_projects().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_edits_flow_back_to_the_dashboard(workspace: Workspace) -> Result<()> {
    workspace.sign_in().await?;
    let project = workspace
        .catalog
        .create_project(
            CreateProjectRequest::new("Website Redesign").with_description("Spring launch"),
        )
        .await?;

    let board = workspace.catalog.open_board(project.id()).await?;
    let wireframes = board
        .create_task(CreateTaskRequest::new("Draft wireframes"))
        .await?;
    board
        .create_task(CreateTaskRequest::new("Write copy").with_status(TaskStatus::InProgress))
        .await?;

    let drag = DragResult {
        draggable_id: wireframes.id().to_string(),
        source: DropLocation::in_column(TaskStatus::Todo, 0),
        destination: Some(DropLocation::in_column(TaskStatus::Completed, 0)),
    };
    ensure!(matches!(board.on_drag_end(&drag).await?, DragOutcome::Moved(_)));
    ensure!(workspace.last_toast_title().as_deref() == Some("Task Updated"));

    let stored = workspace
        .store
        .find_task(wireframes.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should be stored"))?;
    ensure!(stored.status() == TaskStatus::Completed);

    let projects = workspace.catalog.list_projects().await?;
    let summary = Catalog::summary(&projects);
    ensure!(summary.projects == 1);
    ensure!(summary.tasks.total == 2);
    ensure!(summary.tasks.completed == 1);
    ensure!(summary.tasks.percentage == 50);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_from_the_board_removes_every_task(workspace: Workspace) -> Result<()> {
    workspace.sign_in().await?;
    let project = workspace
        .catalog
        .create_project(CreateProjectRequest::new("Mobile App"))
        .await?;
    let board = workspace.catalog.open_board(project.id()).await?;
    board.create_task(CreateTaskRequest::new("Sketch flows")).await?;

    let next = board.delete_project().await?;

    ensure!(next == Route::Dashboard);
    ensure!(workspace.store.find_project(project.id()).await?.is_none());
    ensure!(workspace.store.list_tasks(project.id()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_description_text(workspace: Workspace) -> Result<()> {
    workspace.sign_in().await?;
    for (title, description) in [
        ("Website Redesign", "Spring launch"),
        ("Mobile App", "Native shell"),
    ] {
        workspace
            .catalog
            .create_project(CreateProjectRequest::new(title).with_description(description))
            .await?;
    }
    let projects = workspace.catalog.list_projects().await?;

    let found = Catalog::search(&projects, "LAUNCH");

    ensure!(found.len() == 1);
    ensure!(found.first().map(|project| project.title().as_str()) == Some("Website Redesign"));
    Ok(())
}
