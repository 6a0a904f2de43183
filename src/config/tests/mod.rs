//! Config module tests
//!
//! Contains test suites for startup settings:
//! - Folder resolution and `~` expansion
//! - Selection mode flags

#[cfg(test)]
mod settings_tests;
