//! Navigation targets returned by services.
//!
//! Services never navigate themselves; they return the [`Route`] the shell
//! should move to (for example after sign-out, or when a project vanished).

use std::fmt;
use uuid::Uuid;

/// Path-addressable screen of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public sign-in entry point.
    SignIn,
    /// Protected dashboard, the safe default view.
    Dashboard,
    /// Project list.
    Projects,
    /// Board of a single project.
    Project(Uuid),
    /// Team directory.
    Team,
    /// Activity overview.
    Activity,
    /// Settings page.
    Settings,
    /// Profile page.
    Profile,
}

impl Route {
    /// Returns `true` when the route requires an authenticated session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::SignIn)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => f.write_str("/auth"),
            Self::Dashboard => f.write_str("/"),
            Self::Projects => f.write_str("/projects"),
            Self::Project(id) => write!(f, "/project/{id}"),
            Self::Team => f.write_str("/team"),
            Self::Activity => f.write_str("/activity"),
            Self::Settings => f.write_str("/settings"),
            Self::Profile => f.write_str("/profile"),
        }
    }
}
