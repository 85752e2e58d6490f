//! # eventhub-auth
//!
//! Authentication for EventHub.
//!
//! ## Modules
//!
//! - `password`: the `PasswordHasher` seam and its Argon2id implementation
//! - `basic`: `Authorization: Basic` header parsing
//! - `gate`: resolves the calling account from credentials

pub mod basic;
pub mod gate;
pub mod password;

pub use basic::{BasicAuthError, BasicCredentials};
pub use gate::AuthGate;
pub use password::{Argon2Hasher, PasswordHasher};
