/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. The cost factor comes from configuration so
 * tests can use the minimum cost.
 */

use bcrypt::BcryptError;

/// bcrypt password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Works for hashes of any cost, including the seeded administrator's.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(password, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(hasher.verify("secret1", &hash).unwrap());
        assert!(!hasher.verify("secret2", &hash).unwrap());
    }

    #[test]
    fn test_verify_seeded_admin_hash() {
        let hasher = PasswordHasher::new(4);
        let hash = crate::backend::accounts::SEED_ADMIN_PASSWORD_HASH;
        assert!(hasher.verify("Admin@2024#Secure!", hash).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash_is_error() {
        let hasher = PasswordHasher::default();
        assert!(hasher.verify("secret1", "not-a-hash").is_err());
    }
}
