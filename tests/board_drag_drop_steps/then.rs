//! Then steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use collabworks::project::{
    domain::TaskStatus,
    ports::TaskRepository,
    services::{BoardError, DragOutcome},
};
use rstest_bdd_macros::then;

#[then("the drag is ignored")]
fn drag_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag.as_ref() {
        Some(Ok(DragOutcome::Ignored)) => Ok(()),
        other => Err(eyre::eyre!("expected an ignored drag, got {other:?}")),
    }
}

#[then(r#"the drag moves the task to "{column}""#)]
fn drag_moves_task(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    match world.last_drag.as_ref() {
        Some(Ok(DragOutcome::Moved(status_move))) if status_move.status == expected => Ok(()),
        other => Err(eyre::eyre!("expected a move to {expected}, got {other:?}")),
    }
}

#[then("the move fails after reconciling with the store")]
fn move_fails_reconciled(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag.as_ref() {
        Some(Err(BoardError::Remote {
            reconciled: true, ..
        })) => Ok(()),
        other => Err(eyre::eyre!("expected a reconciled remote failure, got {other:?}")),
    }
}

#[then(r#""{title}" is in column "{column}" on the board and in the store"#)]
fn task_is_in_column(
    world: &BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let task = world.task_named(&title)?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "board shows {title:?} in {}, expected {expected}",
            task.status()
        ));
    }

    let stored = run_async(world.store.inner.find_task(task.id()))?
        .ok_or_else(|| eyre::eyre!("task {title:?} missing from the store"))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "store holds {title:?} in {}, expected {expected}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("no toast is shown")]
fn no_toast(world: &BoardWorld) -> Result<(), eyre::Report> {
    let toasts = world.notifier.toasts();
    if toasts.is_empty() {
        Ok(())
    } else {
        Err(eyre::eyre!("expected no toast, got {toasts:?}"))
    }
}

#[then(r#"the last toast is titled "{title}""#)]
fn last_toast_titled(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let toast = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("expected a toast titled {title:?}"))?;
    if toast.title() == title {
        Ok(())
    } else {
        Err(eyre::eyre!("last toast was {:?}, expected {title:?}", toast.title()))
    }
}
