/**
 * Authenticator
 *
 * Turns a username and password into a principal. Unknown usernames and
 * wrong passwords fail with the same `AuthError::InvalidCredentials`, and an
 * unknown username still costs one bcrypt verification (against a hash made
 * at start-up) so the two cases take comparable time.
 *
 * `authenticate` is synchronous and CPU-bound; handlers call it through
 * `tokio::task::spawn_blocking`.
 */

use std::sync::Arc;

use crate::backend::auth::password::PasswordVerifier;
use crate::backend::auth::users::{CredentialStore, Principal};
use crate::backend::error::AuthError;

const DUMMY_PASSWORD: &str = "servdesk-timing-equalizer";

/// Verifies login credentials against the credential store
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    verifier: PasswordVerifier,
    dummy_hash: Arc<str>,
}

impl Authenticator {
    /// Create an authenticator
    ///
    /// Hashes a throwaway password at the verifier's cost, so this fails only
    /// if that cost is invalid.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        verifier: PasswordVerifier,
    ) -> Result<Self, bcrypt::BcryptError> {
        let dummy_hash = verifier.hash(DUMMY_PASSWORD)?;
        Ok(Self {
            store,
            verifier,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Check a username and password
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let Some(principal) = self.store.find_by_username(username) else {
            // Burn the same bcrypt work as a real check.
            let _ = self.verifier.verify(password, &self.dummy_hash);
            tracing::warn!("Login failed for unknown user: {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verifier.verify(password, &principal.password_hash) {
            tracing::warn!("Login failed, wrong password for user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!("Credentials verified for user: {}", username);
        Ok(principal)
    }
}
