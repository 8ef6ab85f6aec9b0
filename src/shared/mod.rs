//! Shared Module
//!
//! This module contains types that do not depend on the server stack: the
//! record types exchanged over the API and the application configuration.
//! Everything here compiles without the `ssr` feature.

/// Service, confirmation, and report records
pub mod records;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use records::{Confirmation, ConfirmationId, Report, ReportId, Service, ServiceId};
pub use config::{AppConfig, AppConfigBuilder, AuthConfig, ConfigError};
