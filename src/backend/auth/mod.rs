//! Authentication Module
//!
//! This module handles credential verification, bearer-token issuance, and
//! the session gate in front of every protected route.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - Principal model and credential store
//! ├── password.rs      - bcrypt hashing and verification
//! ├── sessions.rs      - JWT token codec
//! ├── authenticator.rs - Username + password → principal
//! ├── gate.rs          - Bearer token → active principal
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password → credentials verified → token returned
//! 2. **Request**: token in `Authorization: Bearer` → gate checks signature,
//!    expiry, principal existence, and active flag → handler runs
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt
//! - Tokens are stateless HS256 JWTs with a configurable lifetime
//! - Invalid credentials return 401 with one generic message
//! - There is no revocation list; disabling a principal is the way to cut
//!   off its outstanding tokens

/// Principal model and credential store
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Credential verification
pub mod authenticator;

/// Per-request token validation
pub mod gate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use authenticator::Authenticator;
pub use gate::{bearer_token, GateRejection, SessionGate};
pub use password::PasswordVerifier;
pub use sessions::{Claims, TokenCodec, TokenError};
pub use users::{CredentialStore, JsonCredentialStore, Principal};
pub use handlers::{get_me, get_my_items, login, login_json};
