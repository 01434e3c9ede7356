//! Settings context shared by the application shell.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::notification::{Notifier, Toast};
use crate::preferences::{
    domain::{Language, Theme},
    ports::{PreferenceStore, PreferenceStoreError},
};

/// Service-level errors for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Preference storage failed.
    #[error(transparent)]
    Store(#[from] PreferenceStoreError),
}

/// Theme and language state passed explicitly to consumers.
///
/// The theme is read from the store once at construction and written back on
/// every change. The language is never persisted.
pub struct SettingsContext<S, N>
where
    S: PreferenceStore,
    N: Notifier,
{
    store: Arc<S>,
    notifier: Arc<N>,
    storage_key: String,
    theme: Theme,
    language: Language,
}

impl<S, N> SettingsContext<S, N>
where
    S: PreferenceStore,
    N: Notifier,
{
    /// Loads the stored theme, falling back to `default_theme` when nothing
    /// (or an unrecognised value) is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when the store cannot be read.
    pub fn load(
        store: Arc<S>,
        notifier: Arc<N>,
        storage_key: impl Into<String>,
        default_theme: Theme,
    ) -> Result<Self, SettingsError> {
        let key = storage_key.into();
        let theme = match store.get(&key)? {
            Some(stored) => Theme::try_from(stored.as_str()).unwrap_or_else(|err| {
                warn!(key = %key, error = %err, "ignoring stored theme");
                default_theme
            }),
            None => default_theme,
        };
        debug!(key = %key, theme = %theme, "loaded theme preference");
        Ok(Self {
            store,
            notifier,
            storage_key: key,
            theme,
            language: Language::default(),
        })
    }

    /// Returns the active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switches and persists the theme.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when the store cannot be written; the
    /// active theme is left unchanged in that case.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        self.store.set(&self.storage_key, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// Switches the language for this session.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.notifier.notify(
            Toast::new("Language Updated")
                .with_description("Your language preference has been updated."),
        );
    }
}
