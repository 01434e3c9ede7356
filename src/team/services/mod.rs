//! Service layer for the team directory.

mod directory;

pub use directory::{TeamDirectoryService, TeamServiceError, TeamServiceResult};
