//! Authentication and the protected-view gate.
//!
//! The hosted auth provider is reached through [`ports::AuthProvider`]. An
//! [`services::AuthContext`] is the explicit context object that resolves
//! the initial session, follows provider session changes on a background
//! task, and tells the shell what to render through
//! [`domain::GateDecision`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
