/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The authenticator and token codec used by the login handlers
 * - The session gate used by the auth middleware
 * - The three record stores
 *
 * Nothing here is a global; everything is built once in `create_app` and
 * cloned into each request.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use std::sync::Arc;
 * use servdesk::backend::records::JsonRecordStore;
 * use servdesk::shared::Service;
 *
 * async fn handler(State(services): State<Arc<JsonRecordStore<Service>>>) {
 *     let all = services.list().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{Authenticator, CredentialStore, PasswordVerifier, SessionGate, TokenCodec};
use crate::backend::error::BackendError;
use crate::backend::records::{JsonRecordStore, RecordStores};
use crate::shared::{AppConfig, Confirmation, Report, Service};

/// Application state shared by every handler
///
/// # Fields
///
/// * `authenticator` - Username + password verification
/// * `token_codec` - Bearer token signing and verification
/// * `gate` - Per-request token and principal checks
/// * `records` - Service, confirmation, and report stores
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub token_codec: Arc<TokenCodec>,
    pub gate: SessionGate,
    pub records: RecordStores,
}

impl AppState {
    /// Wire the auth components together around one credential store
    pub fn new(
        config: &AppConfig,
        credentials: Arc<dyn CredentialStore>,
        records: RecordStores,
    ) -> Result<Self, BackendError> {
        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let verifier = PasswordVerifier::new(config.auth.bcrypt_cost);
        let authenticator = Authenticator::new(credentials.clone(), verifier)
            .map_err(|e| BackendError::state(format!("Failed to initialize authenticator: {e}")))?;
        let gate = SessionGate::new(token_codec.clone(), credentials);

        tracing::info!(
            "Auth configured: bcrypt cost {}, token lifetime {:?}",
            verifier.cost(),
            token_codec.ttl()
        );

        Ok(Self {
            authenticator,
            token_codec,
            gate,
            records,
        })
    }
}

impl FromRef<AppState> for Authenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.authenticator.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_codec.clone()
    }
}

/// Lets `auth_middleware` take `State<SessionGate>` directly
impl FromRef<AppState> for SessionGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gate.clone()
    }
}

impl FromRef<AppState> for Arc<JsonRecordStore<Service>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.records.services.clone()
    }
}

impl FromRef<AppState> for Arc<JsonRecordStore<Confirmation>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.records.confirmations.clone()
    }
}

impl FromRef<AppState> for Arc<JsonRecordStore<Report>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.records.reports.clone()
    }
}
