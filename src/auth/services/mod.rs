//! Application services for authentication.

mod context;

pub use context::{AuthContext, AuthServiceError, AuthServiceResult};
