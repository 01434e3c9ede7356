//! In-memory auth provider for tests and offline use.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;
use uuid::Uuid;

use crate::auth::{
    domain::{AuthUser, Credentials, Session, SignUpRequest, UserId},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};

/// Thread-safe in-memory account table with a single active session.
#[derive(Debug, Clone)]
pub struct InMemoryAuthProvider {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    session: Arc<watch::Sender<Option<Session>>>,
}

#[derive(Debug, Clone)]
struct Account {
    user: AuthUser,
    password_digest: [u8; 32],
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            accounts: Arc::default(),
            session: Arc::new(sender),
        }
    }
}

impl InMemoryAuthProvider {
    /// Creates a provider with no accounts and no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.read().map(|accounts| accounts.len()).unwrap_or_default()
    }
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}

fn account_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn poisoned(err: impl ToString) -> AuthProviderError {
    AuthProviderError::provider(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn current_session(&self) -> AuthProviderResult<Option<Session>> {
        Ok(self.session.borrow().clone())
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<Session> {
        let user = {
            let accounts = self.accounts.read().map_err(poisoned)?;
            let account = accounts
                .get(&account_key(credentials.email()))
                .ok_or(AuthProviderError::InvalidCredentials)?;
            if account.password_digest != digest(credentials.password()) {
                return Err(AuthProviderError::InvalidCredentials);
            }
            account.user.clone()
        };
        let session = Session {
            user,
            access_token: Uuid::new_v4().to_string(),
        };
        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> AuthProviderResult<AuthUser> {
        let credentials = request.credentials();
        let key = account_key(credentials.email());
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        if accounts.contains_key(&key) {
            return Err(AuthProviderError::EmailTaken(credentials.email().to_owned()));
        }
        let user = AuthUser {
            id: UserId::new(),
            email: credentials.email().to_owned(),
            full_name: Some(request.full_name().to_owned()),
        };
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password_digest: digest(credentials.password()),
            },
        );
        Ok(user)
    }

    async fn sign_out(&self) -> AuthProviderResult<()> {
        self.session.send_replace(None);
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> AuthProviderResult<()> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let key = accounts
            .iter()
            .find(|(_, account)| account.user.id == user_id)
            .map(|(key, _)| key.clone())
            .ok_or(AuthProviderError::UnknownUser(user_id))?;
        accounts.remove(&key);
        drop(accounts);

        let signed_in_as_deleted = self
            .session
            .borrow()
            .as_ref()
            .is_some_and(|session| session.user.id == user_id);
        if signed_in_as_deleted {
            self.session.send_replace(None);
        }
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
