//! Translation of drag-and-drop results into status moves.

use super::{ProjectDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Position inside a droppable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    /// Identifier of the column; it equals the column's status string.
    pub droppable_id: String,
    /// Visual index inside the column.
    pub index: usize,
}

impl DropLocation {
    /// Creates a location.
    #[must_use]
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }

    /// Creates a location in the column for `status`.
    #[must_use]
    pub fn in_column(status: TaskStatus, index: usize) -> Self {
        Self::new(status.as_str(), index)
    }
}

/// Outcome reported by the drag library when a card is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    /// Identifier of the dragged card; it equals the task identifier.
    pub draggable_id: String,
    /// Where the card was picked up.
    pub source: DropLocation,
    /// Where the card was released, or `None` outside any column.
    pub destination: Option<DropLocation>,
}

/// Status change requested by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMove {
    /// Task being moved.
    pub task_id: TaskId,
    /// Destination column.
    pub status: TaskStatus,
}

impl DragResult {
    /// Resolves the drag into a status move.
    ///
    /// Returns `Ok(None)` for a release outside any column or back onto the
    /// exact starting slot. A release into the same column at another index
    /// still yields a move, since intra-column order is never stored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidIdentifier`] when the dragged id
    /// is not a task id, or [`ProjectDomainError::UnknownColumn`] when the
    /// destination is not a board column.
    pub fn resolve(&self) -> Result<Option<StatusMove>, ProjectDomainError> {
        let Some(destination) = &self.destination else {
            return Ok(None);
        };
        if *destination == self.source {
            return Ok(None);
        }
        let status = TaskStatus::try_from(destination.droppable_id.as_str())
            .map_err(|err| ProjectDomainError::UnknownColumn(err.0))?;
        let task_id = TaskId::parse(&self.draggable_id)?;
        Ok(Some(StatusMove { task_id, status }))
    }
}
