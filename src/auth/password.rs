//! Password hashing and verification using Argon2
//!
//! Uses the argon2id variant with default parameters. Stored operator
//! hashes are PHC-formatted strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::types::VitrineError;

/// Hash a password, returning the PHC-formatted string
pub fn hash_password(password: &str) -> Result<String, VitrineError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VitrineError::Auth(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored PHC hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, VitrineError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| VitrineError::Auth(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
