//! CLI module for argument validation and output formatting.
//!
//! This module provides zero-dependency positional argument validation
//! and rendering of results and usage errors.

pub mod args;
pub mod output;
