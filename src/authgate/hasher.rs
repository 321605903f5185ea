//! bcrypt password hashing.

use super::error::AuthError;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt.
    ///
    /// # Errors
    /// Returns `AuthError::Hash` if the cost is outside bcrypt's range.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// Returns `AuthError::Hash` if the stored hash is malformed.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(bcrypt::verify(password, hash)?)
    }

    /// [`Self::hash`] on the blocking pool.
    pub async fn hash_blocking(&self, password: String) -> Result<String, AuthError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hash(e.to_string()))?
    }

    /// [`Self::verify`] on the blocking pool.
    pub async fn verify_blocking(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Hash(e.to_string()))?
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
