//! Explicit authentication context with a mount/unmount lifecycle.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::auth::{
    domain::{AuthDomainError, AuthState, AuthUser, Credentials, GateDecision, SignUpRequest},
    ports::{AuthProvider, AuthProviderError},
};
use crate::navigation::Route;
use crate::notification::{Notifier, Toast};

/// Service-level errors for authentication flows.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),
    /// The provider rejected the request.
    #[error(transparent)]
    Provider(#[from] AuthProviderError),
    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,
    /// The typed confirmation email differs from the account email.
    #[error("email confirmation does not match")]
    EmailMismatch,
}

/// Result type for authentication flows.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Authentication state holder passed to every consumer that needs it.
///
/// [`AuthContext::mount`] performs the initial session check and starts a
/// background task that mirrors provider session changes into the context
/// state. [`AuthContext::unmount`] (or dropping the context) stops that task.
pub struct AuthContext<P, N>
where
    P: AuthProvider + 'static,
    N: Notifier,
{
    provider: Arc<P>,
    notifier: Arc<N>,
    state: Arc<watch::Sender<AuthState>>,
    listener: Option<JoinHandle<()>>,
}

impl<P, N> AuthContext<P, N>
where
    P: AuthProvider + 'static,
    N: Notifier,
{
    /// Resolves the initial session and subscribes to session changes.
    ///
    /// A failing session lookup is logged and treated as "no session".
    /// Must be called from within a Tokio runtime.
    pub async fn mount(provider: Arc<P>, notifier: Arc<N>) -> Self {
        let (sender, _) = watch::channel(AuthState::Loading);
        let state = Arc::new(sender);
        let mut changes = provider.subscribe();

        let initial = match provider.current_session().await {
            Ok(session) => AuthState::from_session(session),
            Err(err) => {
                error!(error = %err, "error getting session");
                AuthState::Unauthenticated
            }
        };
        debug!(authenticated = initial.user().is_some(), "initial session resolved");
        state.send_replace(initial);

        let listener_state = Arc::clone(&state);
        let listener = tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let session = changes.borrow_and_update().clone();
                debug!(authenticated = session.is_some(), "session changed");
                listener_state.send_replace(AuthState::from_session(session));
            }
        });

        Self {
            provider,
            notifier,
            state,
            listener: Some(listener),
        }
    }

    /// Stops following provider session changes.
    pub fn unmount(mut self) {
        self.stop_listener();
    }

    fn stop_listener(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Returns the gate decision for the current state.
    #[must_use]
    pub fn gate(&self) -> GateDecision {
        self.state.borrow().gate()
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.state.borrow().user().cloned()
    }

    /// Signs in and returns the route to show next.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError`] when the credentials are invalid or the
    /// provider rejects them. A destructive toast is raised in both cases.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthServiceResult<Route> {
        let result = self.try_sign_in(email, password).await;
        match &result {
            Ok(_) => self.notifier.notify(
                Toast::new("Signed in successfully").with_description("Welcome back!"),
            ),
            Err(err) => self.notify_failure("Sign in failed", err),
        }
        result
    }

    async fn try_sign_in(&self, email: &str, password: &str) -> AuthServiceResult<Route> {
        let credentials = Credentials::new(email, password)?;
        let session = self.provider.sign_in(&credentials).await?;
        info!(user_id = %session.user.id, "signed in");
        self.state.send_replace(AuthState::Authenticated(session));
        Ok(Route::Dashboard)
    }

    /// Registers an account and returns the route to show next (sign-in).
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError`] when validation fails or the provider
    /// rejects the registration.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> AuthServiceResult<Route> {
        let result = self.try_sign_up(email, password, full_name).await;
        match &result {
            Ok(_) => self.notifier.notify(
                Toast::new("Account created successfully")
                    .with_description("You can now sign in with your credentials."),
            ),
            Err(err) => self.notify_failure("Sign up failed", err),
        }
        result
    }

    async fn try_sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> AuthServiceResult<Route> {
        let request = SignUpRequest::new(email, password, full_name)?;
        let user = self.provider.sign_up(&request).await?;
        info!(user_id = %user.id, "account created");
        Ok(Route::SignIn)
    }

    /// Signs out and returns the route to show next (sign-in).
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Provider`] when the provider fails.
    pub async fn sign_out(&self) -> AuthServiceResult<Route> {
        match self.provider.sign_out().await {
            Ok(()) => {
                self.state.send_replace(AuthState::Unauthenticated);
                self.notifier.notify(Toast::new("Signed out successfully"));
                Ok(Route::SignIn)
            }
            Err(err) => {
                let err = AuthServiceError::from(err);
                self.notify_failure("Sign out failed", &err);
                Err(err)
            }
        }
    }

    /// Deletes the signed-in account after the user retyped its email, then
    /// signs out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::NotSignedIn`] without a session,
    /// [`AuthServiceError::EmailMismatch`] when `confirm_email` differs from
    /// the account email, or provider errors.
    pub async fn delete_account(&self, confirm_email: &str) -> AuthServiceResult<Route> {
        let user = self.current_user().ok_or(AuthServiceError::NotSignedIn)?;
        if confirm_email != user.email {
            self.notifier.notify(Toast::destructive(
                "Error",
                "Email confirmation does not match",
            ));
            return Err(AuthServiceError::EmailMismatch);
        }

        if let Err(err) = self.provider.delete_user(user.id).await {
            error!(user_id = %user.id, error = %err, "error deleting account");
            self.notifier.notify(Toast::destructive(
                "Error",
                "Failed to delete account. Please try again later.",
            ));
            return Err(err.into());
        }

        info!(user_id = %user.id, "account deleted");
        self.notifier.notify(
            Toast::new("Account Deleted")
                .with_description("Your account has been successfully deleted."),
        );
        self.sign_out().await
    }

    fn notify_failure(&self, title: &str, err: &AuthServiceError) {
        error!(error = %err, "{title}");
        self.notifier.notify(Toast::destructive(title, err.to_string()));
    }
}

impl<P, N> Drop for AuthContext<P, N>
where
    P: AuthProvider + 'static,
    N: Notifier,
{
    fn drop(&mut self) {
        self.stop_listener();
    }
}
