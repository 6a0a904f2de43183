//! Core module tests
//!
//! Contains test suites for the folder model:
//! - Scanning and folder change tests
//! - Selection tests
//! - Directory source tests
//! - Type tests (SelectionMode, ListingState)

#[cfg(test)]
mod source_tests;
#[cfg(test)]
mod types_tests;
