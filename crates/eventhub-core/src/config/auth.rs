//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Basic authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Realm advertised in the `WWW-Authenticate` challenge.
    #[serde(default = "default_realm")]
    pub realm: String,
    /// Minimum password length for new accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Argon2 lanes.
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
    /// Administrator seeded at startup, if any.
    #[serde(default)]
    pub admin: Option<AdminSeed>,
}

/// Credentials for the administrator account created on startup.
///
/// Self-registration only ever grants `USER`; this is the only way an
/// `ADMIN` account comes into existence.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminSeed {
    /// Admin login email.
    pub email: String,
    /// Admin raw password.
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: default_realm(),
            password_min_length: default_password_min(),
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
            admin: None,
        }
    }
}

fn default_realm() -> String {
    "eventhub".to_string()
}

fn default_password_min() -> usize {
    4
}

fn default_argon2_memory() -> u32 {
    19_456
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}
