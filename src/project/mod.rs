//! Projects, tasks and the kanban board.
//!
//! Projects own an ordered collection of tasks; each task sits in one of
//! three board columns keyed by [`domain::TaskStatus`]. The hosted store is
//! reached through the [`ports::ProjectRepository`] and
//! [`ports::TaskRepository`] contracts. [`services::BoardController`] keeps
//! one open project in memory, applies edits optimistically and re-reads the
//! project from the store whenever a remote write fails.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
