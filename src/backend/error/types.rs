/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * Raised by the authenticator and the session gate:
 * - Wrong username or password at login
 * - Missing, malformed, forged, or expired bearer tokens
 * - Disabled accounts
 *
 * ## Record Errors
 *
 * Raised by the CRUD handlers:
 * - Record not found
 * - JSON file load or flush failures
 *
 * ## State Errors
 *
 * Background task failures such as a panicked password hashing job.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::records::store::StoreError;

/// Message returned for a failed login
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";
/// Message returned for every rejected bearer token
pub const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";
/// Message returned when the principal is disabled
pub const FORBIDDEN_MESSAGE: &str = "Inactive user";

/// Authentication failures visible to clients
///
/// Every token problem collapses into `Unauthenticated` so clients cannot
/// tell a forged token from an expired one. `Forbidden` is the only case
/// where the caller's identity is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// Missing, malformed, forged, expired, or orphaned token
    #[error("{}", UNAUTHENTICATED_MESSAGE)]
    Unauthenticated,

    /// Valid token for a disabled principal
    #[error("{}", FORBIDDEN_MESSAGE)]
    Forbidden,
}

impl AuthError {
    /// HTTP status for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    /// Whether the response must carry a `WWW-Authenticate: Bearer` challenge
    pub fn needs_challenge(&self) -> bool {
        self.status_code() == StatusCode::UNAUTHORIZED
    }
}

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use servdesk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("Service not found");
/// let err = BackendError::state("Password hashing task failed");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Authentication or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Requested record does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Handler error with an explicit status (e.g., unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// State error (e.g., a blocking task panicked)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Auth` - 401, or 403 for disabled accounts
    /// - `NotFound` - 404 Not Found
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError` - 500 Internal Server Error
    /// - `Store` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Store and state failures are reported generically; the detail is
    /// logged server-side only.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(err) => err.to_string(),
            Self::NotFound { message } => message.clone(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::StateError { .. } | Self::Store(_) => "Internal server error".to_string(),
        }
    }
}
