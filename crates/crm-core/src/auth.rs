//! Password hashing for the login gate
//!
//! Passwords are stored as the lowercase hex SHA-224 digest of their UTF-8
//! bytes: one round, no salt, no per-user input. Existing store files hold
//! hashes in exactly this form, so changing the scheme would lock every
//! operator out.
//!
//! Known weakness: identical passwords produce identical hashes across users
//! and the digest is cheap to brute-force.

use sha2::{Digest, Sha224};

/// Length of a stored password hash in hex characters
pub const PASSWORD_HASH_HEX_LEN: usize = 56;

/// Hash a plaintext password into its stored representation
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha224::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
