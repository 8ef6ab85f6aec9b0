//! Authentication test helpers
//!
//! Provides a test server over a temporary data directory, seeded with the
//! `childe` principal, plus helpers for logging in and building
//! `Authorization` headers.

use axum::http::{header, HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use servdesk::backend::auth::{JsonCredentialStore, PasswordVerifier};
use servdesk::backend::server::config::{load_credentials, USERS_FILE};
use servdesk::backend::server::create_app_with_credentials;
use servdesk::shared::AppConfig;

/// Secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret-with-enough-bytes";

/// Password of the seeded `childe` principal
pub const CHILDE_PASSWORD: &str = "tatang123";

/// bcrypt cost used by every test server
pub const TEST_BCRYPT_COST: u32 = 4;

/// A running test server and the handles needed to poke at it
pub struct TestApp {
    pub server: TestServer,
    pub credentials: Arc<JsonCredentialStore>,
    pub config: AppConfig,
    pub data_dir: TempDir,
}

impl TestApp {
    /// Start a server with the default token lifetime
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::from_secs(30 * 60)).await
    }

    /// Start a server whose tokens live for `ttl`
    pub async fn spawn_with_ttl(ttl: Duration) -> Self {
        let data_dir = TempDir::new().unwrap();
        seed_users(&data_dir);

        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .token_ttl(ttl)
            .bcrypt_cost(TEST_BCRYPT_COST)
            .data_dir(data_dir.path())
            .build()
            .unwrap();

        let credentials = Arc::new(load_credentials(&config).unwrap());
        let server = build_server(&config, credentials.clone()).await;

        Self {
            server,
            credentials,
            config,
            data_dir,
        }
    }

    /// Start a fresh server over the same data directory
    pub async fn restart(self) -> Self {
        let credentials = Arc::new(load_credentials(&self.config).unwrap());
        let server = build_server(&self.config, credentials.clone()).await;

        Self {
            server,
            credentials,
            config: self.config,
            data_dir: self.data_dir,
        }
    }

    /// `POST /token` with a password form
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/token")
            .form(&[("username", username), ("password", password)])
            .await
    }

    /// Log in and return the access token
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let body: serde_json::Value = self.login(username, password).await.json();
        body["access_token"]
            .as_str()
            .expect("login response has no access_token")
            .to_string()
    }

    /// Token for the seeded `childe` principal
    pub async fn childe_token(&self) -> String {
        self.token_for("childe", CHILDE_PASSWORD).await
    }
}

async fn build_server(config: &AppConfig, credentials: Arc<JsonCredentialStore>) -> TestServer {
    let app = create_app_with_credentials(config, credentials).await.unwrap();
    TestServer::new(app).unwrap()
}

fn seed_users(dir: &TempDir) {
    let hash = PasswordVerifier::new(TEST_BCRYPT_COST)
        .hash(CHILDE_PASSWORD)
        .unwrap();
    let users = serde_json::json!({
        "users": [
            {
                "username": "childe",
                "full_name": "Ajax Tartaglia",
                "email": "ajax@gmail.com",
                "hashed_password": hash,
                "disabled": false
            }
        ]
    });
    std::fs::write(dir.path().join(USERS_FILE), users.to_string()).unwrap();
}

/// Create authorization header
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}
