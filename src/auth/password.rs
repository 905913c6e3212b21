// src/auth/password.rs
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use log::error;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::ServerError;

const SALT_BYTES: usize = 16;

/// Argon2id with a fresh random salt, encoded as a PHC string
/// (`$argon2id$v=19$m=...$salt$hash`).
pub fn hash_password(password: &str) -> Result<String, ServerError> {
    let mut raw = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut raw);

    let salt = SaltString::encode_b64(&raw).map_err(|e| {
        error!("salt encoding failed: {e}");
        ServerError::InternalError
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("password hashing failed: {e}");
            ServerError::InternalError
        })
}

/// False for a wrong password and for a stored value that isn't a PHC string.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
