/**
 * Session Tokens
 *
 * This module issues and decodes the bearer tokens handed out at login.
 * Tokens are HS256 JWTs carrying the principal's username and an expiry.
 * Nothing is stored server side; a token is valid for as long as its
 * signature and expiry say so and its subject is still an active principal.
 *
 * `decode` only checks structure and signature. Expiry is checked by the
 * session gate so the codec stays a pure parse-and-authenticate step.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::shared::AuthConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the principal
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Whether the token has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Token codec failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The string is not a token this codec could ever have produced
    #[error("malformed token")]
    Malformed,

    /// Well-formed, but not signed with our secret
    #[error("token signature does not verify")]
    SignatureInvalid,

    /// Signing failed
    #[error("failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// Issues and decodes signed session tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Create a codec from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes(), config.token_ttl)
    }

    /// Create a codec from a raw secret and token lifetime
    pub fn from_secret(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_string(), "sub".to_string()]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Configured token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` using the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now(), self.ttl)
    }

    /// Issue a token for `subject` as if the current time were `now`
    pub fn issue_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: subject.to_string(),
            exp: iat.saturating_add(ttl_secs),
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Verify and decode a token without checking expiry
    ///
    /// Anything shaped like a token that does not verify under our secret is
    /// `SignatureInvalid`, including edits to the header, the separators, or
    /// the signature encoding. `Malformed` is kept for strings that cannot be
    /// a token at all.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        if !is_token_shaped(token) {
            return Err(TokenError::Malformed);
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                // Only reachable once the signature has verified.
                ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
                _ => TokenError::SignatureInvalid,
            })
    }
}

/// Non-empty, printable ASCII, with at least one separator
fn is_token_shaped(token: &str) -> bool {
    !token.is_empty() && token.contains('.') && token.bytes().all(|b| b.is_ascii_graphic())
}
