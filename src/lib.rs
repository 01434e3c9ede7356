//! Collabworks: project and team collaboration workspace.
//!
//! This crate provides the application core behind a small collaboration
//! tool: project boards with drag-and-drop task columns, a filterable team
//! directory, account sessions with a route gate, and per-user profile and
//! display preferences.
//!
//! # Architecture
//!
//! Collabworks follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   filesystem preferences, tracing notifications)
//! - **Services**: Controllers that combine ports with observable state
//!
//! # Modules
//!
//! - [`project`]: Projects, tasks and the optimistic board controller
//! - [`team`]: Team roster with filtering, sorting and pagination
//! - [`auth`]: Sessions, sign-in flows and the route gate
//! - [`profile`]: Personal details of the signed-in user
//! - [`preferences`]: Theme, language and notification settings
//! - [`notification`]: Transient toast messages

pub mod auth;
pub mod config;
pub mod navigation;
pub mod notification;
pub mod preferences;
pub mod profile;
pub mod project;
pub mod team;
pub mod telemetry;
