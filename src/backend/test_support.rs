//! Fixtures shared by the backend unit tests.

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use crate::backend::auth::{JsonCredentialStore, PasswordVerifier, Principal};
use crate::backend::records::RecordStores;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

pub const TEST_SECRET: &str = "unit-test-secret-that-is-long-enough-for-hs256";
pub const TEST_PASSWORD: &str = "tatang123";

pub fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .data_dir(data_dir)
        .build()
        .unwrap()
}

pub fn childe(verifier: PasswordVerifier) -> Principal {
    Principal {
        username: "childe".to_string(),
        display_name: Some("Ajax Tartaglia".to_string()),
        email: Some("ajax@gmail.com".to_string()),
        password_hash: verifier.hash(TEST_PASSWORD).unwrap(),
        active: true,
    }
}

pub struct TestContext {
    pub state: AppState,
    pub credentials: Arc<JsonCredentialStore>,
    // Held so the data directory outlives the stores.
    pub _dir: TempDir,
}

/// App state over a temp data dir, with `childe` as the only principal
pub async fn test_context() -> TestContext {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let credentials = Arc::new(JsonCredentialStore::from_principals([childe(
        PasswordVerifier::new(config.auth.bcrypt_cost),
    )]));
    let records = RecordStores::load(&config.data_dir).await.unwrap();
    let state = AppState::new(&config, credentials.clone(), records).unwrap();

    TestContext {
        state,
        credentials,
        _dir: dir,
    }
}

pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}
