//! Password hashing using bcrypt
//!
//! bcrypt is CPU-bound by design; async callers should go through
//! `hash_async` / `verify_async`, which run on the blocking pool.

use anyhow::{Context, Result};

/// Work factor used when none is configured
pub const DEFAULT_COST: u32 = 13;

/// Password hashing service with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password (blocking)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).context("Failed to hash password")
    }

    /// Verify a password against a stored hash (blocking)
    ///
    /// A malformed hash is an error, a mismatch is `Ok(false)`.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).context("Failed to verify password")
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .context("Task join error")?
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .context("Task join error")?
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
