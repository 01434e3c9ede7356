//! Adapter implementations for the team context.

mod memory;

pub use memory::InMemoryTeamRepository;
