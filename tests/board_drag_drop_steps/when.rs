//! When steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use collabworks::project::domain::{DragResult, DropLocation};
use rstest_bdd_macros::when;

fn release(
    world: &mut BoardWorld,
    title: &str,
    destination: Option<DropLocation>,
) -> Result<(), eyre::Report> {
    let task = world.task_named(title)?;
    let drag = DragResult {
        draggable_id: task.id().to_string(),
        source: DropLocation::in_column(task.status(), 0),
        destination,
    };
    let result = run_async(world.board()?.on_drag_end(&drag));
    world.last_drag = Some(result);
    Ok(())
}

#[when(r#""{title}" is dropped at index {index:usize} of column "{column}""#)]
fn dropped_in_column(
    world: &mut BoardWorld,
    title: String,
    index: usize,
    column: String,
) -> Result<(), eyre::Report> {
    release(world, &title, Some(DropLocation::new(column, index)))
}

#[when(r#""{title}" is released outside the board"#)]
fn released_outside(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    release(world, &title, None)
}
