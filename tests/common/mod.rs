//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test server over a temporary data directory
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use auth_helpers::*;
