//! Domain model for sessions and the authentication gate.

mod error;
mod ids;
mod session;
mod state;

pub use error::AuthDomainError;
pub use ids::UserId;
pub use session::{AuthUser, Credentials, Session, SignUpRequest};
pub use state::{AuthState, GateDecision};
