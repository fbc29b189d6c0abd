//! # Credential Hashing
//!
//! Password hashing and verification for user accounts.
//!
//! ## Storage Format
//! Passwords are stored as Argon2id PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`). The salt is random
//! per hash, so two accounts with the same password never share a stored
//! value. Verification goes through the argon2 crate and is
//! constant-time.
//!
//! Plaintext passwords exist only transiently in login/seed call frames.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use crate::error::{StoreError, StoreResult};

/// Hashes a plaintext password for storage.
pub fn hash_password(plain: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored PHC hash.
///
/// An unparseable stored hash verifies as `false` rather than erroring:
/// at the login boundary both cases collapse into the same generic
/// invalid-credentials outcome anyway.
pub fn verify_password(stored_hash: &str, candidate: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
