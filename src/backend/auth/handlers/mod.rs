//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Token issuance handlers
//! └── me.rs       - Current principal handlers
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /token - OAuth2 password form login
//! - **`login_json`** - POST /api/auth/login - JSON login
//! - **`get_me`** - GET /users/me - Current principal
//! - **`get_my_items`** - GET /users/me/items - Items owned by the principal

/// Request and response types
pub mod types;

/// Login handlers
pub mod login;

/// Current principal handlers
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, OwnedItem, PrincipalResponse, TokenResponse};

// Re-export handlers
pub use login::{login, login_json};
pub use me::{get_me, get_my_items};
