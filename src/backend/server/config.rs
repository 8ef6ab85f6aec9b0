/**
 * Server Configuration
 *
 * This module handles loading of the server configuration and the
 * file-backed stores that live in the data directory.
 *
 * # Configuration Sources
 *
 * In order of precedence (last wins):
 * 1. Built-in defaults
 * 2. TOML file named by `SERVDESK_CONFIG`, if set
 * 3. Environment variables (`.env` is loaded by the binary first)
 *
 * # Error Handling
 *
 * Unlike optional services, configuration problems are fatal: a missing
 * or short `JWT_SECRET` stops startup with a `ConfigError`.
 */

use std::path::Path;

use crate::backend::auth::JsonCredentialStore;
use crate::backend::records::{RecordStores, StoreError};
use crate::shared::{AppConfig, ConfigError};

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_VAR: &str = "SERVDESK_CONFIG";

/// File name of the credential store inside the data directory
pub const USERS_FILE: &str = "users.json";

/// Load configuration from the optional TOML file and the environment
///
/// # Example
///
/// ```rust,no_run
/// use servdesk::backend::server::config::load_config;
///
/// let config = load_config().expect("invalid configuration");
/// println!("listening on {}", config.port);
/// ```
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = AppConfig::builder();

    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        tracing::info!("Reading configuration file {}", path);
        builder = builder.toml_file(Path::new(&path))?;
    }

    let config = builder.env()?.build()?;

    tracing::info!(
        "Configuration loaded (data_dir: {}, port: {}, token ttl: {}s)",
        config.data_dir.display(),
        config.port,
        config.auth.token_ttl.as_secs()
    );

    Ok(config)
}

/// Load the credential store from `<data_dir>/users.json`
pub fn load_credentials(config: &AppConfig) -> Result<JsonCredentialStore, StoreError> {
    let store = JsonCredentialStore::load(&config.data_dir.join(USERS_FILE))?;
    tracing::info!("Loaded {} principal(s)", store.len());
    Ok(store)
}

/// Load the record stores from the data directory
pub async fn load_records(config: &AppConfig) -> Result<RecordStores, StoreError> {
    let records = RecordStores::load(&config.data_dir).await?;
    tracing::info!("Record stores loaded from {}", config.data_dir.display());
    Ok(records)
}
