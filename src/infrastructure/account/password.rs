//! Password hashing utilities using bcrypt

use std::fmt::Debug;

use crate::domain::AccountError;

/// Work factor for bcrypt hashing (2^10 rounds)
pub const HASH_COST: u32 = 10;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password
    fn hash(&self, password: &str) -> Result<String, AccountError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Bcrypt-based password hasher
///
/// Every hash carries its own random salt; verification is constant-time
/// inside the bcrypt primitive.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the default work factor
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Create a hasher with an explicit work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, AccountError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AccountError::storage(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
