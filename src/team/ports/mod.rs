//! Port contracts for the team context.

mod repository;

pub use repository::{TeamMemberRepository, TeamRepositoryError, TeamRepositoryResult};
