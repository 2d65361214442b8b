//! # Password Hashing
//!
//! Password hashing and verification using Argon2.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) with a random per-hash salt,
//! so hashing the same password twice never yields the same digest.
//! Password policy (minimum length etc.) belongs to request validation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Password hashing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PwdError {
    /// The hasher itself failed (parameter or resource failure).
    #[error("Failed to hash password: {0}")]
    Hash(String),

    /// The stored digest is not a parseable PHC string.
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

/// Hash a password using the Argon2 algorithm.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PwdError::Hash(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against an Argon2 hash.
///
/// A mismatch is `Ok(false)`. Only an unparseable digest is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PwdError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| PwdError::MalformedHash(e.to_string()))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
