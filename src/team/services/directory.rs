//! Roster orchestration: remote writes followed by a fresh read.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::notification::{Notifier, Toast};
use crate::team::{
    domain::{MemberDraft, MemberId, TeamDomainError, TeamMember},
    ports::{TeamMemberRepository, TeamRepositoryError},
};

/// Service-level errors for team directory operations.
#[derive(Debug, Error)]
pub enum TeamServiceError {
    /// The form is incomplete. No remote call was made.
    #[error(transparent)]
    Validation(#[from] TeamDomainError),
    /// The store rejected the operation.
    #[error(transparent)]
    Repository(#[from] TeamRepositoryError),
}

/// Result type for team directory operations.
pub type TeamServiceResult<T> = Result<T, TeamServiceError>;

const SAVE_FAILED: &str = "An error occurred while saving team member";

/// Keeps the directory roster in sync with the store.
///
/// Writes never patch the local roster; each successful write is followed
/// by a full re-read, so the roster always mirrors the store.
pub struct TeamDirectoryService<R, N, C>
where
    R: TeamMemberRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    roster: watch::Sender<Vec<TeamMember>>,
}

impl<R, N, C> TeamDirectoryService<R, N, C>
where
    R: TeamMemberRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty roster. Call
    /// [`TeamDirectoryService::refresh`] to load it.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        let (roster, _) = watch::channel(Vec::new());
        Self {
            repository,
            notifier,
            clock,
            roster,
        }
    }

    /// Returns a snapshot of the roster.
    #[must_use]
    pub fn roster(&self) -> Vec<TeamMember> {
        self.roster.borrow().clone()
    }

    /// Subscribes to roster reloads.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<TeamMember>> {
        self.roster.subscribe()
    }

    /// Re-reads the roster from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::Repository`] when the store cannot be
    /// read. The previous roster is kept.
    pub async fn refresh(&self) -> TeamServiceResult<()> {
        match self.repository.list_members().await {
            Ok(members) => {
                debug!(count = members.len(), "team roster loaded");
                self.roster.send_replace(members);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error loading team members");
                self.notifier.notify(Toast::destructive(
                    "Error loading team members",
                    "There was a problem loading the team directory.",
                ));
                Err(err.into())
            }
        }
    }

    /// Adds a member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::Validation`] for an incomplete form, or
    /// [`TeamServiceError::Repository`] when the store rejects the write.
    pub async fn create_member(&self, draft: MemberDraft) -> TeamServiceResult<TeamMember> {
        let name = draft.name().to_owned();
        let member = TeamMember::new(draft, &*self.clock).inspect_err(|_| self.missing())?;
        self.repository
            .insert_member(&member)
            .await
            .inspect_err(|err| self.save_failed(err))?;
        info!(member_id = %member.id(), "team member added");
        self.notifier.notify(
            Toast::new("Team member added")
                .with_description(format!("{name} has been added to the team")),
        );
        self.refresh().await?;
        Ok(member)
    }

    /// Replaces a member's details.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::Validation`] for an incomplete form, or
    /// [`TeamServiceError::Repository`] when the store rejects the write.
    pub async fn update_member(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> TeamServiceResult<TeamMember> {
        draft.validate().inspect_err(|_| self.missing())?;
        let member = self
            .repository
            .update_member(id, &draft)
            .await
            .inspect_err(|err| self.save_failed(err))?;
        info!(member_id = %id, "team member updated");
        self.notifier.notify(
            Toast::new("Team member updated")
                .with_description(format!("{} has been updated successfully", member.name())),
        );
        self.refresh().await?;
        Ok(member)
    }

    /// Removes a member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::Repository`] when the store rejects the
    /// delete.
    pub async fn delete_member(&self, id: MemberId) -> TeamServiceResult<()> {
        if let Err(err) = self.repository.delete_member(id).await {
            error!(member_id = %id, error = %err, "error removing team member");
            self.notifier.notify(Toast::destructive(
                "Error",
                "There was a problem removing the team member.",
            ));
            return Err(err.into());
        }
        info!(member_id = %id, "team member removed");
        self.refresh().await
    }

    fn missing(&self) {
        self.notifier.notify(Toast::destructive(
            "Missing information",
            "Please fill in all required fields",
        ));
    }

    fn save_failed(&self, err: &TeamRepositoryError) {
        error!(error = %err, "error saving team member");
        self.notifier.notify(Toast::destructive("Error", SAVE_FAILED));
    }
}
