//! Password hashing.

pub mod argon;

pub use argon::Argon2Hasher;

use eventhub_core::result::AppResult;

/// Hashes raw passwords and checks them against stored hashes.
///
/// Shared by the auth gate (verify) and account registration (hash).
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a raw password into a self-describing PHC string.
    fn hash(&self, raw_password: &str) -> AppResult<String>;

    /// Check a raw password against a stored hash. A mismatch is
    /// `Ok(false)`; an unreadable hash is an error.
    fn verify(&self, raw_password: &str, stored_hash: &str) -> AppResult<bool>;
}
