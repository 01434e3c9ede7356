//! Port contracts for the hosted auth provider.

pub mod provider;

pub use provider::{AuthProvider, AuthProviderError, AuthProviderResult};
