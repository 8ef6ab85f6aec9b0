/**
 * Principals and the Credential Store
 *
 * This module holds the principal model and the store the authenticator and
 * session gate resolve usernames against. Principals are provisioned out of
 * band in `users.json`; no HTTP operation creates, edits, or deletes them.
 *
 * # File Format
 *
 * ```json
 * {
 *   "users": [
 *     {
 *       "username": "childe",
 *       "full_name": "Ajax Tartaglia",
 *       "email": "ajax@gmail.com",
 *       "hashed_password": "$2b$12$...",
 *       "disabled": false
 *     }
 *   ]
 * }
 * ```
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::backend::records::StoreError;

/// An identity that can log in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique, immutable login name
    pub username: String,
    /// Human-readable name
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// bcrypt hash; never serialized into a response
    pub password_hash: String,
    /// Disabled principals can authenticate but are refused by the gate
    pub active: bool,
}

/// Lookup capability consumed by the authenticator and the session gate
pub trait CredentialStore: Send + Sync {
    /// Find a principal by username
    fn find_by_username(&self, username: &str) -> Option<Principal>;
}

/// One entry of `users.json`
#[derive(Debug, Serialize, Deserialize)]
struct StoredUser {
    username: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    hashed_password: String,
    #[serde(default)]
    disabled: bool,
}

impl From<StoredUser> for Principal {
    fn from(user: StoredUser) -> Self {
        Self {
            username: user.username,
            display_name: user.full_name,
            email: user.email,
            password_hash: user.hashed_password,
            active: !user.disabled,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<StoredUser>,
}

/// Credential store loaded from `users.json` and held in memory
#[derive(Debug, Default)]
pub struct JsonCredentialStore {
    principals: RwLock<HashMap<String, Principal>>,
}

impl JsonCredentialStore {
    /// Build a store from principals already in memory
    pub fn from_principals(principals: impl IntoIterator<Item = Principal>) -> Self {
        let principals = principals
            .into_iter()
            .map(|p| (p.username.clone(), p))
            .collect();
        Self {
            principals: RwLock::new(principals),
        }
    }

    /// Load principals from a `users.json` file
    ///
    /// A missing file yields an empty store, which means nobody can log in.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let users = match std::fs::read(path) {
            Ok(bytes) => {
                let file: UsersFile =
                    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                file.users
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, no principals can log in", path.display());
                Vec::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let store = Self::from_principals(users.into_iter().map(Principal::from));
        tracing::info!("Loaded {} principals from {}", store.len(), path.display());
        Ok(store)
    }

    /// Number of principals
    pub fn len(&self) -> usize {
        self.principals
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no principals
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enable or disable a principal. Returns `false` for unknown usernames.
    ///
    /// Takes effect on the next gate evaluation, including for tokens that
    /// are already outstanding.
    pub fn set_active(&self, username: &str, active: bool) -> bool {
        let mut principals = self
            .principals
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match principals.get_mut(username) {
            Some(principal) => {
                principal.active = active;
                tracing::info!("Principal {} is now {}", username, if active { "active" } else { "disabled" });
                true
            }
            None => false,
        }
    }

    /// Remove a principal. Returns the removed record, if any.
    pub fn remove(&self, username: &str) -> Option<Principal> {
        self.principals
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(username)
    }
}

impl CredentialStore for JsonCredentialStore {
    fn find_by_username(&self, username: &str) -> Option<Principal> {
        self.principals
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }
}
