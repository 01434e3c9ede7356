//! Team directory: the roster of people in the organization.
//!
//! [`services::TeamDirectoryService`] keeps the roster in sync with the
//! hosted `team_members` table. [`domain::DirectoryView`] derives the
//! visible page from that roster through a fixed pipeline of category,
//! search, status and role filters, followed by an optional sort and
//! pagination.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
