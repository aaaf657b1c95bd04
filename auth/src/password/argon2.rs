use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Hash verified when the account being logged into does not exist.
static DECOY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Password hashing implementation.
///
/// One-way, salted, deliberately slow hashing (internally uses Argon2id with
/// the crate's default cost parameters). Stateless and cheap to copy so it can
/// be moved onto blocking worker threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated for every call, so hashing the same
    /// password twice yields two different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Any mismatch is reported as `false`, including a stored hash that
    /// cannot be parsed. The digest comparison is constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Spend the work of one verification without a real account.
    ///
    /// Keeps the latency of a login for an unknown email in line with a login
    /// for a known email and a wrong password.
    pub fn verify_dummy(&self, password: &str) {
        let decoy = DECOY_HASH.get_or_init(|| self.hash("decoy-password-never-issued").ok());

        if let Some(hash) = decoy {
            let _ = self.verify(password, hash);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret123").expect("Failed to hash password");

        assert_ne!(hash, "secret123");
        assert!(!hash.contains("secret123"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret123").unwrap();
        let second = hasher.hash("secret123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret123", &first));
        assert!(hasher.verify("secret123", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "invalid_hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_verify_dummy_initializes_decoy_once() {
        let hasher = PasswordHasher::new();
        hasher.verify_dummy("decoy-password-never-issued");
        hasher.verify_dummy("anything");

        let decoy = DECOY_HASH.get().expect("Decoy hash not initialized");
        let hash = decoy.as_deref().expect("Decoy hashing failed");
        assert!(hasher.verify("decoy-password-never-issued", hash));
    }

    #[test]
    fn test_unicode_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("pässwörd-密码").unwrap();
        assert!(hasher.verify("pässwörd-密码", &hash));
        assert!(!hasher.verify("passwörd-密码", &hash));
    }
}
