/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Load the credential store from the data directory
 * 2. Load the record stores
 * 3. Build the token codec, authenticator, and session gate
 * 4. Create and configure the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_credentials, load_records};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if a data file exists but cannot be read or parsed, or if the
/// configured bcrypt cost is rejected.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    let credentials = Arc::new(load_credentials(config)?);
    create_app_with_credentials(config, credentials).await
}

/// Create the application around an already-built credential store
///
/// Tests use this to keep a handle on the store, e.g. to disable a
/// principal after a token has been issued.
pub async fn create_app_with_credentials(
    config: &AppConfig,
    credentials: Arc<dyn CredentialStore>,
) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing servdesk backend");

    let records = load_records(config).await?;
    let app_state = AppState::new(config, credentials, records)?;

    tracing::info!("Application state initialized");

    Ok(create_router(app_state))
}
