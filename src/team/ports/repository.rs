//! Repository port for the hosted `team_members` table.

use crate::team::domain::{MemberDraft, MemberId, TeamMember};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for team member repository operations.
pub type TeamRepositoryResult<T> = Result<T, TeamRepositoryError>;

/// Team member persistence contract.
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// Returns the whole roster, newest first.
    async fn list_members(&self) -> TeamRepositoryResult<Vec<TeamMember>>;

    /// Stores a new member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::DuplicateMember`] when the id is
    /// already taken. Employee ids are not checked for uniqueness.
    async fn insert_member(&self, member: &TeamMember) -> TeamRepositoryResult<()>;

    /// Replaces the editable fields of a member and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::NotFound`] when the member does not
    /// exist.
    async fn update_member(
        &self,
        id: MemberId,
        draft: &MemberDraft,
    ) -> TeamRepositoryResult<TeamMember>;

    /// Deletes a member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::NotFound`] when the member does not
    /// exist.
    async fn delete_member(&self, id: MemberId) -> TeamRepositoryResult<()>;
}

/// Errors returned by team member repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TeamRepositoryError {
    /// A member with the same identifier already exists.
    #[error("duplicate team member identifier: {0}")]
    DuplicateMember(MemberId),

    /// The member was not found.
    #[error("team member not found: {0}")]
    NotFound(MemberId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TeamRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
