//! Backend Module
//!
//! This module contains all server-side code for the servdesk application.
//! It provides an Axum HTTP server with bearer-token authentication in front
//! of three JSON-file backed record collections.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, tokens, session gate
//! - **`records`** - Record stores and their CRUD handlers
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── records/        - Services, confirmations, reports
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the token codec, authenticator, session gate, and the
//! record stores. Every store is loaded once at startup, mutated in memory
//! under a lock, and flushed back to its file on each write.
//!
//! # Error Handling
//!
//! Every layer has its own `thiserror` enum. They all fold into
//! `BackendError`, which renders as `{"error": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and principal management
pub mod auth;

/// Record stores and handlers
pub mod records;

/// Middleware for request processing
pub mod middleware;

#[cfg(test)]
pub(crate) mod test_support;

/// Re-export commonly used types
pub use error::{AuthError, BackendError};
pub use server::{create_app, AppState};
