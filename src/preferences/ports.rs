//! Port for client-local key/value storage.

use std::sync::Arc;
use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Durable string storage keyed by name, like browser local storage.
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the key is invalid or the
    /// backing storage cannot be read.
    fn get(&self, key: &str) -> PreferenceStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the key is invalid or the
    /// backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> PreferenceStoreResult<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the key is invalid or the
    /// backing storage cannot be written.
    fn remove(&self, key: &str) -> PreferenceStoreResult<()>;
}

/// Errors returned by preference stores.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// The key cannot be used as a storage name.
    #[error("invalid preference key '{0}'")]
    InvalidKey(String),

    /// Storage-layer failure.
    #[error("preference storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
