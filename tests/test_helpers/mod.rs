//! Scoped environment overrides for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the touched variables when dropped.
///
/// Holding the guard serializes every test that edits the process
/// environment.
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Applies `overrides`; `None` removes the variable.
    pub fn apply(overrides: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let saved = overrides
            .iter()
            .map(|&(name, value)| {
                let previous = env::var(name).ok();
                write_var(name, value);
                (name.to_owned(), previous)
            })
            .collect();

        Self { saved, _lock: lock }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (name, previous) in self.saved.drain(..).rev() {
            write_var(&name, previous.as_deref());
        }
    }
}

fn write_var(name: &str, value: Option<&str>) {
    unsafe {
        // SAFETY: ENV_MUTEX serializes environment mutation across tests.
        match value {
            Some(text) => env::set_var(name, text),
            None => env::remove_var(name),
        }
    }
}
