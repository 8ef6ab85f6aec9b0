//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! ├── api_routes.rs    - Login, health, and current-principal routes
//! └── record_routes.rs - Service, confirmation, and report routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /token` - OAuth2 password form login
//! - `POST /api/auth/login` - JSON login
//! - `GET /health` - Liveness check
//!
//! ## Protected (bearer token required)
//!
//! - `GET /users/me`, `GET /users/me/items`
//! - `/services/` - list, get, create, update, delete
//! - `/confirmations/` - list, get, create
//! - `/reports/` - list, get, create
//!
//! # Example
//!
//! ```rust,ignore
//! use servdesk::backend::routes::create_router;
//!
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// Login, health, and account routes
pub mod api_routes;

/// Record collection routes
pub mod record_routes;

// Re-export commonly used functions
pub use router::create_router;
