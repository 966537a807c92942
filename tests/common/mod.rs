//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including
//! directory fixtures and a builder for on-disk directory files.

pub mod fixtures;

pub use fixtures::*;
