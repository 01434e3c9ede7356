//! In-memory team member repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::team::{
    domain::{MemberDraft, MemberId, TeamMember},
    ports::{TeamMemberRepository, TeamRepositoryError, TeamRepositoryResult},
};

/// Thread-safe in-memory team member repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    members: Arc<RwLock<HashMap<MemberId, TeamMember>>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TeamRepositoryError {
    TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamRepository {
    async fn list_members(&self) -> TeamRepositoryResult<Vec<TeamMember>> {
        let members = self.members.read().map_err(lock_error)?;
        let mut roster: Vec<TeamMember> = members.values().cloned().collect();
        roster.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(roster)
    }

    async fn insert_member(&self, member: &TeamMember) -> TeamRepositoryResult<()> {
        let mut members = self.members.write().map_err(lock_error)?;
        if members.contains_key(&member.id()) {
            return Err(TeamRepositoryError::DuplicateMember(member.id()));
        }
        members.insert(member.id(), member.clone());
        Ok(())
    }

    async fn update_member(
        &self,
        id: MemberId,
        draft: &MemberDraft,
    ) -> TeamRepositoryResult<TeamMember> {
        let mut members = self.members.write().map_err(lock_error)?;
        let member = members
            .get_mut(&id)
            .ok_or(TeamRepositoryError::NotFound(id))?;
        member
            .apply_draft(draft)
            .map_err(TeamRepositoryError::persistence)?;
        Ok(member.clone())
    }

    async fn delete_member(&self, id: MemberId) -> TeamRepositoryResult<()> {
        let mut members = self.members.write().map_err(lock_error)?;
        members
            .remove(&id)
            .map(|_| ())
            .ok_or(TeamRepositoryError::NotFound(id))
    }
}
