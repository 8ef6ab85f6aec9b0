//! Servdesk - Main Library
//!
//! Servdesk is a small authenticated HTTP API for a service desk: a catalog of
//! services, customer confirmations, and staff reports, persisted as flat JSON
//! files and protected by bearer tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Plain data types with no server dependencies
//!   - Record types (services, confirmations, reports)
//!   - Application configuration and its builder
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Credential store, password verification, token codec
//!   - Session gate middleware in front of every protected route
//!   - JSON-file record stores and their CRUD handlers
//!   - Axum router and server initialization
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and both binaries
//!
//! # Usage
//!
//! ```rust,no_run
//! use servdesk::backend::server::config::load_config;
//! use servdesk::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication Flow
//!
//! 1. `POST /token` with username and password returns a signed bearer token
//! 2. Every other route requires `Authorization: Bearer <token>`
//! 3. The session gate checks signature, expiry, that the principal still
//!    exists, and that the account is active
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, `thiserror` enums per layer
//! - `backend::error::BackendError` converts into JSON HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
