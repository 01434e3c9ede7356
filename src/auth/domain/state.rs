//! Authentication gate state machine.

use super::{AuthUser, Session};
use crate::navigation::Route;

/// Session resolution state.
///
/// Starts as `Loading`; once the first session check completes it moves to
/// one of the two terminal states and may then flip between them whenever
/// the provider reports a session change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Initial session check in flight.
    #[default]
    Loading,
    /// A session is present.
    Authenticated(Session),
    /// No session.
    Unauthenticated,
}

/// What the shell renders in place of a protected subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Neutral placeholder while the session resolves.
    Placeholder,
    /// Navigate away, replacing the current history entry.
    Redirect(Route),
    /// Render the protected subtree.
    Render,
}

impl AuthState {
    /// Maps an optional provider session to a terminal state.
    #[must_use]
    pub fn from_session(session: Option<Session>) -> Self {
        session.map_or(Self::Unauthenticated, Self::Authenticated)
    }

    /// Returns `true` while the first session check is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Authenticated(session) => Some(&session.user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    /// Returns the gate decision for this state.
    #[must_use]
    pub const fn gate(&self) -> GateDecision {
        match self {
            Self::Loading => GateDecision::Placeholder,
            Self::Authenticated(_) => GateDecision::Render,
            Self::Unauthenticated => GateDecision::Redirect(Route::SignIn),
        }
    }
}
