//! Client-local preferences.
//!
//! The theme is the only durable client-side state; it is stored under a
//! single key through a [`ports::PreferenceStore`]. The language choice lives
//! in memory for the lifetime of a [`services::SettingsContext`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
