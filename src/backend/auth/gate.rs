/**
 * Session Gate
 *
 * The checkpoint every protected request passes before any handler runs.
 *
 * # States
 *
 * ```text
 * NoToken ──────────────────────────────► Unauthenticated (401 + challenge)
 * TokenPresent ── decode fails ─────────► Unauthenticated
 * TokenDecoded ── expired ──────────────► Unauthenticated
 * ClaimsValid ─── unknown subject ──────► Unauthenticated
 * PrincipalResolved ── disabled ────────► Forbidden (403)
 * Authorized ───────────────────────────► principal handed to the handler
 * ```
 *
 * The specific reason is logged; clients only ever see `Unauthenticated`
 * or `Forbidden`.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use crate::backend::auth::sessions::{TokenCodec, TokenError};
use crate::backend::auth::users::{CredentialStore, Principal};
use crate::backend::error::AuthError;

/// Why the gate turned a request away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No `Authorization: Bearer` header
    NoToken,
    /// Token could not be parsed
    Malformed,
    /// Token was not signed with our secret
    SignatureInvalid,
    /// Token expiry has passed
    Expired,
    /// Token subject is no longer a principal
    UnknownSubject,
    /// Principal exists but is disabled
    Disabled,
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoToken => "no bearer token",
            Self::Malformed => "malformed token",
            Self::SignatureInvalid => "bad token signature",
            Self::Expired => "expired token",
            Self::UnknownSubject => "token subject not found",
            Self::Disabled => "principal disabled",
        };
        f.write_str(reason)
    }
}

impl From<TokenError> for GateRejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SignatureInvalid => Self::SignatureInvalid,
            TokenError::Malformed | TokenError::Encode(_) => Self::Malformed,
        }
    }
}

impl From<GateRejection> for AuthError {
    fn from(rejection: GateRejection) -> Self {
        match rejection {
            GateRejection::Disabled => AuthError::Forbidden,
            _ => AuthError::Unauthenticated,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Any other scheme, or an empty
/// token, counts as no token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Validates bearer tokens and resolves them to active principals
#[derive(Clone)]
pub struct SessionGate {
    codec: Arc<TokenCodec>,
    store: Arc<dyn CredentialStore>,
}

impl SessionGate {
    /// Create a gate that decodes with `codec` and resolves subjects in `store`
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn CredentialStore>) -> Self {
        Self { codec, store }
    }

    /// Resolve the request's bearer token to an active principal
    pub fn require_authenticated_principal(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        self.evaluate(headers, Utc::now()).map_err(|rejection| {
            tracing::warn!("Session gate rejected request: {}", rejection);
            AuthError::from(rejection)
        })
    }

    /// Run the gate against `headers` as of `now`
    pub fn evaluate(&self, headers: &HeaderMap, now: DateTime<Utc>) -> Result<Principal, GateRejection> {
        let token = bearer_token(headers).ok_or(GateRejection::NoToken)?;
        self.evaluate_token(token, now)
    }

    /// Run the gate against a raw token as of `now`
    pub fn evaluate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, GateRejection> {
        let claims = self.codec.decode(token)?;

        if claims.is_expired_at(now) {
            tracing::debug!("Token for {} expired at {:?}", claims.sub, claims.expires_at());
            return Err(GateRejection::Expired);
        }

        let principal = self
            .store
            .find_by_username(&claims.sub)
            .ok_or(GateRejection::UnknownSubject)?;

        if !principal.active {
            return Err(GateRejection::Disabled);
        }

        Ok(principal)
    }
}
