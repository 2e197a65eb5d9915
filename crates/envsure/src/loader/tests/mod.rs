//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test settings-file reading behavior (missing, empty, malformed,
//!   unreadable files).
//! - Test merge precedence between file values and the ambient environment.
//! - Test validation outcomes: defaults, aggregate errors, idempotence.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd, real environment) hold
//!   `env_lock()` and run serially.
//! - Most tests inject a fixed snapshot via `with_env_snapshot` instead of
//!   mutating the real environment.

use std::sync::Mutex;

pub mod file_tests;

/// Returns the global test lock for process-global state isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
