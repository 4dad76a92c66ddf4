//! Integration tests for tempconv.
//!
//! These tests exercise validation and conversion through the public API,
//! and the built binary end to end.

pub mod conversion_tests;
