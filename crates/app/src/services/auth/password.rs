//! Salted PBKDF2 password hashing.
//!
//! Encoded hashes are `base64(salt || key)` with a 16-byte random salt and a
//! 32-byte PBKDF2-HMAC-SHA256 key (10 000 rounds). The salt travels inside
//! the encoded string, so nothing else needs to be stored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

/// Salt length in bytes.
pub const SALT_SIZE: usize = 16;

/// Derived key length in bytes.
pub const KEY_SIZE: usize = 32;

/// PBKDF2 round count.
pub const ITERATIONS: u32 = 10_000;

/// Misuse of the hashing routines. Wrong passwords are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("stored password hash cannot be empty")]
    EmptyHash,
}

/// Hash `password` with a fresh random salt.
///
/// # Errors
///
/// Returns `PasswordError::EmptyPassword` if `password` is blank.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::EmptyPassword);
    }

    let mut salt = [0u8; SALT_SIZE];
    rand::rng().fill_bytes(&mut salt);

    Ok(encode(&salt, &derive_key(password, &salt)))
}

/// Check `password` against an encoded hash produced by [`hash_password`].
///
/// A stored hash that is not valid base64, or decodes to fewer bytes than
/// salt plus key, never verifies. Bytes after the key are ignored.
///
/// # Errors
///
/// Returns `PasswordError::EmptyPassword` or `PasswordError::EmptyHash` for
/// blank inputs.
pub fn verify_password(password: &str, encoded: &str) -> Result<bool, PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    if encoded.trim().is_empty() {
        return Err(PasswordError::EmptyHash);
    }

    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        tracing::debug!("Stored password hash is not valid base64");
        return Ok(false);
    };
    let (Some(salt), Some(expected)) = (
        decoded.get(..SALT_SIZE),
        decoded.get(SALT_SIZE..SALT_SIZE + KEY_SIZE),
    ) else {
        tracing::debug!(len = decoded.len(), "Stored password hash is too short");
        return Ok(false);
    };

    let actual = derive_key(password, salt);

    Ok(constant_time_eq(&actual, expected))
}

fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_SIZE] {
    pbkdf2::pbkdf2_hmac_array::<Sha256, KEY_SIZE>(password.as_bytes(), salt, ITERATIONS)
}

fn encode(salt: &[u8], key: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(SALT_SIZE + KEY_SIZE);
    bytes.extend_from_slice(salt);
    bytes.extend_from_slice(key);
    STANDARD.encode(bytes)
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b) {
        result |= x ^ y;
    }

    result == 0
}
