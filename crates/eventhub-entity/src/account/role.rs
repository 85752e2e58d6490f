//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles an account may hold.
///
/// Stored as a Postgres `account_role[]`; the derive also provides the
/// array type info.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "account_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    /// Regular account.
    User,
    /// Administrator.
    Admin,
}

impl AccountRole {
    /// Return the role as an uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
