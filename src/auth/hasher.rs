//! Password hashing
//!
//! The store talks to the hashing primitive through `PasswordHasher`;
//! `BcryptHasher` is the production implementation.

use crate::config::DEFAULT_BCRYPT_COST;
use crate::error::CredentialError;

/// One-way, self-salting password hash.
///
/// Both calls are CPU-bound and may take tens of milliseconds; the store runs
/// them on the blocking thread pool.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Returns `Ok(false)` for a well-formed hash that does not match and
    /// `Err` only when the hash itself cannot be parsed.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// bcrypt with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
        bcrypt::verify(plaintext, hash).map_err(|e| CredentialError::Verification(e.to_string()))
    }
}
