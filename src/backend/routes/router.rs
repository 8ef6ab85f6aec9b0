/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public routes (login, health)
 * 2. Protected routes (current principal, records) behind `auth_middleware`
 * 3. Fallback handlers (JSON 404 and 405)
 *
 * The auth middleware is attached with `route_layer`, so it only runs for
 * requests that matched a protected route. Unknown paths go straight to the
 * fallback.
 */

use axum::{http::StatusCode, middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_account_routes, configure_public_routes};
use crate::backend::routes::record_routes::configure_record_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the auth components and stores
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = configure_record_routes(configure_account_routes(Router::new()))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let router = configure_public_routes(Router::new())
        .merge(protected)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not Found")
}

async fn method_not_allowed() -> BackendError {
    BackendError::handler(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
