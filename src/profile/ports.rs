//! Repository port for the hosted `profiles` table.

use crate::auth::domain::UserId;
use crate::profile::domain::UserProfile;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile of a user.
    ///
    /// Returns `None` when the user has never saved a profile.
    async fn find_profile(&self, id: UserId) -> ProfileRepositoryResult<Option<UserProfile>>;

    /// Inserts or replaces a profile.
    async fn save_profile(&self, profile: &UserProfile) -> ProfileRepositoryResult<()>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
