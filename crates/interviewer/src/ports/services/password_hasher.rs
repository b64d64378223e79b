//! Password Hasher Port
//!
//! One-way, salted hashing. Implementations must verify in constant time.

use crate::domain::errors::DomainError;

pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing string
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for malformed hashes.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}
