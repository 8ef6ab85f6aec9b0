/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * an authenticated principal. It runs the session gate on the incoming
 * headers and hands the resolved principal to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::gate::SessionGate;
use crate::backend::auth::users::Principal;
use crate::backend::error::{AuthError, BackendError};

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Resolves the principal and checks that it is active
/// 4. Attaches the principal to request extensions for use in handlers
///
/// Returns 401 for missing or invalid credentials and 403 for a disabled
/// principal. The handler is never invoked in either case.
pub async fn auth_middleware(
    State(gate): State<SessionGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let principal = gate.require_authenticated_principal(request.headers())?;

    tracing::debug!("Authenticated request from {}", principal.username);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated principal
///
/// Reads the principal the auth middleware stored in request extensions.
/// Using it on a route without the middleware yields 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Principal not found in request extensions");
                BackendError::Auth(AuthError::Unauthenticated)
            })?;

        Ok(AuthUser(principal))
    }
}
