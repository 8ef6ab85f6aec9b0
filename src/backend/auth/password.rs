/**
 * Password Hashing and Verification
 *
 * Thin wrapper around bcrypt. Hashes are self-describing (`$2b$<cost>$<salt><digest>`)
 * so verification needs nothing but the stored string.
 *
 * Both operations are deliberately slow. Async callers should run them on
 * the blocking pool and must not hold a lock while they do.
 */

/// bcrypt hasher with a fixed cost for new hashes
#[derive(Debug, Clone, Copy)]
pub struct PasswordVerifier {
    cost: u32,
}

impl PasswordVerifier {
    /// Create a verifier that hashes with `cost`
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    ///
    /// Fails only if the configured cost is out of bcrypt's range.
    pub fn hash(&self, plaintext: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Check a password against a stored hash
    ///
    /// Malformed hashes verify as `false`.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash is unusable: {}", e);
                false
            }
        }
    }
}
