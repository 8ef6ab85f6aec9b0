//! Application configuration module
//!
//! Provides the configuration types for the server. Values come from an
//! optional TOML file and from environment variables, in that order, and are
//! validated once by [`AppConfigBuilder::build`].
//!
//! | Setting      | Env var             | Default |
//! |--------------|---------------------|---------|
//! | signing key  | `JWT_SECRET`        | none, required |
//! | token ttl    | `TOKEN_TTL_MINUTES` | 30      |
//! | bcrypt cost  | `BCRYPT_COST`       | 12      |
//! | data dir     | `DATA_DIR`          | `data`  |
//! | listen port  | `SERVER_PORT`       | 3000    |

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 30;
/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;
/// Default directory holding the JSON data files
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Shortest signing secret accepted, in bytes
pub const MIN_SECRET_LEN: usize = 32;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Authentication settings handed to the token codec and password verifier
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    /// bcrypt cost used when hashing passwords
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Authentication settings
    pub auth: AuthConfig,
    /// Directory holding `users.json` and the record files
    pub data_dir: PathBuf,
    /// TCP port the server listens on
    pub port: u16,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(MIN_SECRET_LEN));
        }
        if self.auth.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_MINUTES",
                message: "must be greater than zero".to_string(),
            });
        }
        check_bcrypt_cost(self.auth.bcrypt_cost)
    }
}

/// Read `BCRYPT_COST` through `lookup`, falling back to the default
///
/// Applies the same parsing and range check as the full configuration, for
/// tools that need the cost without a JWT secret.
pub fn bcrypt_cost_from<F>(lookup: F) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cost = match lookup("BCRYPT_COST") {
        Some(raw) => parse_var("BCRYPT_COST", &raw)?,
        None => DEFAULT_BCRYPT_COST,
    };
    check_bcrypt_cost(cost)?;
    Ok(cost)
}

fn check_bcrypt_cost(cost: u32) -> Result<(), ConfigError> {
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(ConfigError::InvalidValue {
            key: "BCRYPT_COST",
            message: format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
        });
    }
    Ok(())
}

/// Shape of the optional TOML configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    jwt_secret: Option<String>,
    token_ttl_minutes: Option<u64>,
    bcrypt_cost: Option<u32>,
    data_dir: Option<PathBuf>,
    port: Option<u16>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    data_dir: Option<PathBuf>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Merge values from a TOML document. Values already set are replaced.
    pub fn toml_str(mut self, source: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(source)?;
        if let Some(secret) = file.jwt_secret {
            self.jwt_secret = Some(secret);
        }
        if let Some(minutes) = file.token_ttl_minutes {
            self.token_ttl = Some(Duration::from_secs(minutes.saturating_mul(60)));
        }
        if let Some(cost) = file.bcrypt_cost {
            self.bcrypt_cost = Some(cost);
        }
        if let Some(dir) = file.data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(port) = file.port {
            self.port = Some(port);
        }
        Ok(self)
    }

    /// Merge values from a TOML file on disk
    pub fn toml_file(self, path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.toml_str(&source)
    }

    /// Merge values from the process environment
    pub fn env(self) -> Result<Self, ConfigError> {
        self.env_from(|key| std::env::var(key).ok())
    }

    /// Merge values from an arbitrary variable lookup
    ///
    /// Unset variables leave the current value alone; set but unparsable
    /// variables are an error.
    pub fn env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(raw) = lookup("TOKEN_TTL_MINUTES") {
            let minutes: u64 = parse_var("TOKEN_TTL_MINUTES", &raw)?;
            self.token_ttl = Some(Duration::from_secs(minutes.saturating_mul(60)));
        }
        if let Some(raw) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_var("BCRYPT_COST", &raw)?);
        }
        if let Some(dir) = lookup("DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            self.port = Some(parse_var("SERVER_PORT", &raw)?);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret,
                token_ttl: self
                    .token_ttl
                    .unwrap_or(Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60)),
                bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            },
            data_dir: self.data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        message: format!("cannot parse {raw:?}"),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("JWT_SECRET must be at least {0} bytes")]
    SecretTooShort(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}
