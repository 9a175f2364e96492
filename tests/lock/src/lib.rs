//! Shared helpers for the lock tests.

pub mod ladder_test_helpers;
