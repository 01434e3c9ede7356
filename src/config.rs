//! Application configuration.
//!
//! Defaults match the shipped UI. Every value can be overridden through a
//! `COLLABWORKS_*` environment variable; [`AppConfig::from_lookup`] takes the
//! lookup as a function so callers and tests can supply their own source.

use camino::Utf8PathBuf;
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

use crate::preferences::domain::Theme;

/// Environment variable overriding the directory page size.
pub const PAGE_SIZE_VAR: &str = "COLLABWORKS_PAGE_SIZE";
/// Environment variable overriding the theme storage key.
pub const THEME_STORAGE_KEY_VAR: &str = "COLLABWORKS_THEME_STORAGE_KEY";
/// Environment variable overriding the default theme.
pub const DEFAULT_THEME_VAR: &str = "COLLABWORKS_DEFAULT_THEME";
/// Environment variable overriding the status-change toast duration in milliseconds.
pub const STATUS_TOAST_MS_VAR: &str = "COLLABWORKS_STATUS_TOAST_MS";
/// Environment variable naming the preference directory.
pub const PREFERENCES_DIR_VAR: &str = "COLLABWORKS_PREFERENCES_DIR";
/// Environment variable overriding the default log directive.
pub const LOG_VAR: &str = "COLLABWORKS_LOG";

const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);
const DEFAULT_THEME_STORAGE_KEY: &str = "collabworks-theme";
/// How long the status-change toast stays visible unless configured otherwise.
pub const DEFAULT_STATUS_TOAST: Duration = Duration::from_millis(2000);
const DEFAULT_LOG_DIRECTIVE: &str = "collabworks=info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The page size is not a positive integer.
    #[error("COLLABWORKS_PAGE_SIZE must be a positive integer, got '{0}'")]
    InvalidPageSize(String),

    /// The theme name is unknown.
    #[error("COLLABWORKS_DEFAULT_THEME must name a known theme, got '{0}'")]
    InvalidTheme(String),

    /// The toast duration is not a whole number of milliseconds.
    #[error("COLLABWORKS_STATUS_TOAST_MS must be a whole number of milliseconds, got '{0}'")]
    InvalidDuration(String),

    /// A value that must not be blank was blank.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Runtime configuration for the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Rows per team directory page.
    pub page_size: NonZeroUsize,
    /// Key the theme preference is stored under.
    pub theme_storage_key: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: Theme,
    /// How long the "Task Updated" toast stays visible.
    pub status_toast_duration: Duration,
    /// Directory for file-backed preferences; in-memory when `None`.
    pub preferences_dir: Option<Utf8PathBuf>,
    /// Fallback `tracing` filter directive when `RUST_LOG` is unset.
    pub log_directive: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            status_toast_duration: DEFAULT_STATUS_TOAST,
            preferences_dir: None,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, keeping defaults for unset names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidPageSize(raw.clone()))?;
        }
        if let Some(raw) = lookup(THEME_STORAGE_KEY_VAR) {
            config.theme_storage_key = non_empty(raw, THEME_STORAGE_KEY_VAR)?;
        }
        if let Some(raw) = lookup(DEFAULT_THEME_VAR) {
            config.default_theme =
                Theme::try_from(raw.as_str()).map_err(|_| ConfigError::InvalidTheme(raw.clone()))?;
        }
        if let Some(raw) = lookup(STATUS_TOAST_MS_VAR) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration(raw.clone()))?;
            config.status_toast_duration = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(PREFERENCES_DIR_VAR) {
            config.preferences_dir = Some(Utf8PathBuf::from(non_empty(raw, PREFERENCES_DIR_VAR)?));
        }
        if let Some(raw) = lookup(LOG_VAR) {
            config.log_directive = non_empty(raw, LOG_VAR)?;
        }

        Ok(config)
    }
}

fn non_empty(raw: String, name: &'static str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn defaults_match_the_shipped_ui() {
        let config = AppConfig::default();
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.theme_storage_key, "collabworks-theme");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.status_toast_duration, Duration::from_millis(2000));
        assert!(config.preferences_dir.is_none());
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, Ok(AppConfig::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (PAGE_SIZE_VAR, "10"),
            (THEME_STORAGE_KEY_VAR, "my-theme"),
            (DEFAULT_THEME_VAR, "light"),
            (STATUS_TOAST_MS_VAR, "500"),
            (PREFERENCES_DIR_VAR, "/tmp/prefs"),
            (LOG_VAR, "collabworks=debug"),
        ]));
        let Ok(config) = config else {
            panic!("expected valid configuration, got {config:?}");
        };
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.theme_storage_key, "my-theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.status_toast_duration, Duration::from_millis(500));
        assert_eq!(config.preferences_dir, Some(Utf8PathBuf::from("/tmp/prefs")));
        assert_eq!(config.log_directive, "collabworks=debug");
    }

    #[rstest]
    #[case(PAGE_SIZE_VAR, "0", ConfigError::InvalidPageSize("0".to_owned()))]
    #[case(PAGE_SIZE_VAR, "five", ConfigError::InvalidPageSize("five".to_owned()))]
    #[case(DEFAULT_THEME_VAR, "sepia", ConfigError::InvalidTheme("sepia".to_owned()))]
    #[case(STATUS_TOAST_MS_VAR, "-1", ConfigError::InvalidDuration("-1".to_owned()))]
    #[case(THEME_STORAGE_KEY_VAR, "  ", ConfigError::Empty(THEME_STORAGE_KEY_VAR))]
    fn invalid_values_are_rejected(
        #[case] name: &str,
        #[case] value: &str,
        #[case] expected: ConfigError,
    ) {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[(name, value)])),
            Err(expected)
        );
    }
}
