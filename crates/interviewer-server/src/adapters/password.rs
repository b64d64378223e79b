//! Argon2id password hashing
//!
//! Hashes are stored in PHC string format (`$argon2id$...`), which carries
//! the salt and parameters alongside the digest.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};

use interviewer::{DomainError, PasswordHasher};

/// Argon2id implementation of PasswordHasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let parsed =
            PasswordHash::new(password_hash).map_err(|e| DomainError::Hashing(e.to_string()))?;

        // Argon2 compares digests in constant time
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Hashing(e.to_string())),
        }
    }
}
