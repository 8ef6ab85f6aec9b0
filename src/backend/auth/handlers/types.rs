/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * Nothing here carries a password hash.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::Principal;

/// Login request
///
/// Accepted both as an OAuth2 password form (`POST /token`) and as JSON
/// (`POST /api/auth/login`). Extra OAuth2 fields such as `grant_type` and
/// `scope` are ignored.
#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token response
///
/// Returned by both login handlers, in the OAuth2 token response shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Public view of a principal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrincipalResponse {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
}

impl From<Principal> for PrincipalResponse {
    fn from(principal: Principal) -> Self {
        Self {
            username: principal.username,
            email: principal.email,
            full_name: principal.display_name,
            disabled: !principal.active,
        }
    }
}

/// An item owned by the current principal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnedItem {
    pub item_id: u32,
    pub owner: String,
}
