/**
 * API Route Handlers
 *
 * This module defines the authentication and account routes:
 *
 * ## Public
 * - `POST /token` - OAuth2 password form login
 * - `POST /api/auth/login` - JSON login
 * - `GET /health` - Liveness check
 *
 * ## Protected
 * - `GET /users/me` - Current principal
 * - `GET /users/me/items` - Items owned by the current principal
 */

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, get_my_items, login, login_json};
use crate::backend::server::state::AppState;

/// Configure routes reachable without a token
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/token", post(login))
        .route("/api/auth/login", post(login_json))
        .route("/health", get(health))
}

/// Configure the current-principal routes
///
/// These expect the auth middleware to be layered on by the caller.
pub fn configure_account_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/me", get(get_me))
        .route("/users/me/items", get(get_my_items))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
