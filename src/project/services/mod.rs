//! Service layer for the project catalog and the board.

mod board;
mod catalog;

pub use board::{
    BoardColumn, BoardController, BoardError, BoardResult, CreateTaskRequest, DragOutcome,
    ReconcileOutcome,
};
pub use catalog::{CatalogError, CatalogResult, CreateProjectRequest, ProjectCatalogService};
