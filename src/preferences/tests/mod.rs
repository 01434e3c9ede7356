//! Unit tests for the preferences context.

mod domain_tests;
