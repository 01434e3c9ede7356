//! Profile reads and writes for the signed-in user.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::auth::domain::UserId;
use crate::auth::ports::{AuthProvider, AuthProviderError};
use crate::notification::{Notifier, Toast};
use crate::profile::{
    domain::{ProfileDomainError, ProfilePatch, UserProfile},
    ports::{ProfileRepository, ProfileRepositoryError},
};

/// Service-level errors for profile operations.
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ProfileDomainError),
    /// The store rejected the operation.
    #[error(transparent)]
    Repository(#[from] ProfileRepositoryError),
    /// The session lookup failed.
    #[error(transparent)]
    Auth(#[from] AuthProviderError),
    /// Nobody is signed in.
    #[error("no user is signed in")]
    Unauthenticated,
}

/// Result type for profile operations.
pub type ProfileServiceResult<T> = Result<T, ProfileServiceError>;

/// Reads and updates the current user's profile.
#[derive(Clone)]
pub struct ProfileService<R, A, N, C>
where
    R: ProfileRepository,
    A: AuthProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    auth: Arc<A>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<R, A, N, C> ProfileService<R, A, N, C>
where
    R: ProfileRepository,
    A: AuthProvider,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a profile service.
    #[must_use]
    pub const fn new(repository: Arc<R>, auth: Arc<A>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            auth,
            notifier,
            clock,
        }
    }

    async fn current_user(&self) -> ProfileServiceResult<UserId> {
        self.auth
            .current_session()
            .await?
            .map(|session| session.user.id)
            .ok_or(ProfileServiceError::Unauthenticated)
    }

    async fn load(&self, id: UserId) -> ProfileServiceResult<UserProfile> {
        let stored = self.repository.find_profile(id).await?;
        Ok(stored.unwrap_or_else(|| UserProfile::blank(id, self.clock.utc())))
    }

    /// Returns the signed-in user's profile, blank when none was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileServiceError::Unauthenticated`] when nobody is signed
    /// in, or [`ProfileServiceError::Repository`] when the store cannot be
    /// read.
    pub async fn current_profile(&self) -> ProfileServiceResult<UserProfile> {
        let id = self.current_user().await?;
        self.load(id).await.inspect_err(|err| {
            error!(user_id = %id, error = %err, "error loading profile");
            self.notifier
                .notify(Toast::destructive("Error", "Failed to load profile data"));
        })
    }

    /// Applies a patch to the signed-in user's profile and saves it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileServiceError::Unauthenticated`] when nobody is signed
    /// in, [`ProfileServiceError::Validation`] for an out-of-range age, or
    /// [`ProfileServiceError::Repository`] when the store rejects the write.
    pub async fn update_current_profile(
        &self,
        patch: ProfilePatch,
    ) -> ProfileServiceResult<UserProfile> {
        let id = self.current_user().await?;
        if let Err(err) = patch.validate() {
            self.notifier.notify(Toast::destructive("Invalid profile", err.to_string()));
            return Err(err.into());
        }
        match self.save(id, &patch).await {
            Ok(profile) => {
                info!(user_id = %id, "profile updated");
                self.notifier.notify(
                    Toast::new("Profile Updated")
                        .with_description("Your profile has been successfully updated."),
                );
                Ok(profile)
            }
            Err(err) => {
                error!(user_id = %id, error = %err, "error updating profile");
                self.notifier
                    .notify(Toast::destructive("Error", "Failed to update profile"));
                Err(err)
            }
        }
    }

    async fn save(&self, id: UserId, patch: &ProfilePatch) -> ProfileServiceResult<UserProfile> {
        let mut profile = self.load(id).await?;
        profile.apply(patch, self.clock.utc())?;
        debug!(user_id = %id, "saving profile");
        self.repository.save_profile(&profile).await?;
        Ok(profile)
    }
}
