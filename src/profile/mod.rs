//! Profile of the signed-in user.
//!
//! Reads and writes are always scoped to the session's user; there is no
//! way to reach another user's profile through [`services::ProfileService`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
