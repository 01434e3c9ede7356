//! Auth provider adapters.

pub mod memory;

pub use memory::InMemoryAuthProvider;
