//! Directory-backed preference store.
//!
//! Each key is a file inside a single capability-scoped directory, so a key
//! can never address anything outside it.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::debug;

use crate::preferences::ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};

/// Preference store writing one file per key.
#[derive(Debug)]
pub struct DirectoryPreferenceStore {
    dir: Dir,
}

impl DirectoryPreferenceStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> PreferenceStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(PreferenceStoreError::storage)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(PreferenceStoreError::storage)?;
        debug!(%path, "opened preference directory");
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn validate_key(key: &str) -> PreferenceStoreResult<&str> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if is_valid {
        Ok(key)
    } else {
        Err(PreferenceStoreError::InvalidKey(key.to_owned()))
    }
}

impl PreferenceStore for DirectoryPreferenceStore {
    fn get(&self, key: &str) -> PreferenceStoreResult<Option<String>> {
        let file_name = validate_key(key)?;
        match self.dir.read_to_string(file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PreferenceStoreError::storage(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> PreferenceStoreResult<()> {
        let file_name = validate_key(key)?;
        self.dir
            .write(file_name, value)
            .map_err(PreferenceStoreError::storage)
    }

    fn remove(&self, key: &str) -> PreferenceStoreResult<()> {
        let file_name = validate_key(key)?;
        match self.dir.remove_file(file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PreferenceStoreError::storage(err)),
        }
    }
}
