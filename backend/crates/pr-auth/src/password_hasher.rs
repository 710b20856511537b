//! Argon2id password hashing.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) carrying their own salt and
//! parameters. Argon2 is CPU- and memory-bound, so both directions run on the
//! blocking pool rather than on a runtime worker.

use pr_core::{HashingError, PasswordHasher};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHasher as _};
use async_trait::async_trait;
use log::warn;

#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Whether `plaintext` matches a stored PHC hash. A malformed hash never verifies.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashingError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed = match PasswordHash::new(&hash) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Stored password hash is malformed: {e}");
                    return false;
                }
            };
            Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok()
        })
        .await
        .map_err(|e| HashingError::failed(format!("verify task failed: {e}")))
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashingError::failed(e.to_string()))
        })
        .await
        .map_err(|e| HashingError::failed(format!("hash task failed: {e}")))?
    }
}
