/**
 * Login Handlers
 *
 * This module implements `POST /token` (OAuth2 password form) and
 * `POST /api/auth/login` (JSON). Both are unauthenticated.
 *
 * # Authentication Process
 *
 * 1. Verify username and password on the blocking pool
 * 2. Issue a bearer token for the principal
 * 3. Return `{"access_token": ..., "token_type": "bearer"}`
 *
 * # Security
 *
 * - Unknown users and wrong passwords both return 401 with the same message
 * - Passwords are never logged or returned
 */
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, State,
    },
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// OAuth2 password-flow login
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=childe&password=...
/// ```
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password
/// * `500 Internal Server Error` - password check or token signing failed
pub async fn login(
    State(authenticator): State<Authenticator>,
    State(codec): State<Arc<TokenCodec>>,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Form(request) = form?;
    issue_token(authenticator, &codec, request).await
}

/// JSON login, same contract as [`login`]
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "childe", "password": "..."}
/// ```
pub async fn login_json(
    State(authenticator): State<Authenticator>,
    State(codec): State<Arc<TokenCodec>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body?;
    issue_token(authenticator, &codec, request).await
}

async fn issue_token(
    authenticator: Authenticator,
    codec: &TokenCodec,
    request: LoginRequest,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let LoginRequest { username, password } = request;
    let principal = tokio::task::spawn_blocking(move || authenticator.authenticate(&username, &password))
        .await
        .map_err(|e| BackendError::state(format!("Password verification task failed: {e}")))??;

    let access_token = codec.issue(&principal.username).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::state(format!("Token signing failed: {e}"))
    })?;

    tracing::info!(
        "User logged in successfully: {} (token valid for {:?})",
        principal.username,
        codec.ttl()
    );

    Ok(Json(TokenResponse::bearer(access_token)))
}
