//! Adapter implementations for the project context.

mod memory;
pub mod rows;

pub use memory::InMemoryWorkspaceStore;
