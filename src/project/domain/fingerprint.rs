//! Order-independent digest of a task list.

use super::Task;
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a task list, used to tell whether a re-fetched board
/// differs from the local one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardFingerprint([u8; 32]);

impl BoardFingerprint {
    /// Digests the tasks. The result does not depend on their order.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when a task cannot be serialized.
    pub fn of(tasks: &[Task]) -> Result<Self, serde_json::Error> {
        let mut sorted: Vec<&Task> = tasks.iter().collect();
        sorted.sort_by_key(|task| task.id());
        let mut hasher = Sha256::new();
        for task in sorted {
            hasher.update(serde_json::to_vec(task)?);
            hasher.update([0_u8]);
        }
        Ok(Self(hasher.finalize().into()))
    }
}

impl fmt::Display for BoardFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}
