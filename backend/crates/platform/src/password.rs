//! Password Hashing and Verification
//!
//! Legacy scheme carried over unchanged for compatibility with hashes
//! already stored in the `users` table: SHA-256 of the password
//! concatenated with a single application-wide salt, encoded as lowercase
//! hex.
//!
//! ## Known weakness
//! A static salt shared by all passwords gives up the usual protection of
//! per-user random salts (identical passwords produce identical digests,
//! and one rainbow table covers the whole user table). Every stored hash
//! depends on this exact salt, so the scheme must not change without an
//! explicit migration that rehashes on next login.

use crate::crypto::{constant_time_eq, sha256_hex};

/// Application-wide salt. Changing this invalidates every stored hash.
const SALT: &str = "metaverse-standards-platform-salt-2025";

/// Minimum accepted length for new passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> String {
    let mut data = String::with_capacity(password.len() + SALT.len());
    data.push_str(password);
    data.push_str(SALT);
    sha256_hex(data.as_bytes())
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest_hex: &str) -> bool {
    constant_time_eq(hash_password(password).as_bytes(), digest_hex.as_bytes())
}
