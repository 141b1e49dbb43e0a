//! Password value object.
//!
//! Encapsulates Argon2 hashing and verification so raw passwords never
//! travel past the service layer, and a stored hash is never re-hashed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// An Argon2 password hash, either freshly computed or loaded from storage.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Keep the hash out of debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a raw password.
    ///
    /// # Errors
    /// Returns a validation error when the password is shorter than the
    /// minimum length.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(vec![format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )]));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Borrow the hash string.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string for storage.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a raw password against this hash. Malformed hashes verify as
    /// false rather than erroring.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
