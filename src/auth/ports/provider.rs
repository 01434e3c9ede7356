//! Auth provider port: session lookup, credential flows and change feed.

use crate::auth::domain::{AuthUser, Credentials, Session, SignUpRequest, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for auth provider operations.
pub type AuthProviderResult<T> = Result<T, AuthProviderError>;

/// Session-based authentication contract of the hosted backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the session the provider currently holds, if any.
    async fn current_session(&self) -> AuthProviderResult<Option<Session>>;

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::InvalidCredentials`] when the pair does
    /// not match an account.
    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<Session>;

    /// Registers a new account. Does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::EmailTaken`] when the email is already
    /// registered.
    async fn sign_up(&self, request: &SignUpRequest) -> AuthProviderResult<AuthUser>;

    /// Ends the current session.
    async fn sign_out(&self) -> AuthProviderResult<()>;

    /// Permanently removes an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::UnknownUser`] when no account has the
    /// identifier.
    async fn delete_user(&self, user_id: UserId) -> AuthProviderResult<()>;

    /// Subscribes to session changes. Dropping the receiver unsubscribes.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// Errors returned by auth providers.
#[derive(Debug, Clone, Error)]
pub enum AuthProviderError {
    /// Email and password do not match an account.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// The email address is already registered.
    #[error("user already registered: {0}")]
    EmailTaken(String),

    /// No account has the identifier.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// Provider-side or transport failure.
    #[error("auth provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthProviderError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
