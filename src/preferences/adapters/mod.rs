//! Preference store adapters.

pub mod file;
pub mod memory;

pub use file::DirectoryPreferenceStore;
pub use memory::InMemoryPreferenceStore;
