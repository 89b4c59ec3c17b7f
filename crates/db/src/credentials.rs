//! Password hashing for customer credentials.
//!
//! The `customers.password_hash` column stores an argon2 hash; plaintext
//! never reaches the database.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::DbError;

/// Hash a plaintext password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, DbError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::PasswordHash(format!("failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, DbError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| DbError::PasswordHash(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
