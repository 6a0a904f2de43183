//! Shell module tests
//!
//! Contains test suites for the terminal shell:
//! - Controller tests
//! - Action parsing tests
//! - Session tests
