//! Unit tests for the authentication context.
