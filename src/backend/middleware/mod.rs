//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Session gate middleware for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the principal
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use servdesk::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/users/me", get(get_me))
//!     .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
