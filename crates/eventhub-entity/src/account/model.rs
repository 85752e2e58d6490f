//! Account entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::AccountId;

use super::role::AccountRole;

/// A registered account. Events point at their publishing account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Login email, unique across accounts.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Granted roles, sorted and free of duplicates.
    pub roles: Vec<AccountRole>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check whether the account holds the given role.
    pub fn has_role(&self, role: AccountRole) -> bool {
        self.roles.contains(&role)
    }

    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.has_role(AccountRole::Admin)
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Roles to grant.
    pub roles: BTreeSet<AccountRole>,
}

impl NewAccount {
    /// Materialize the row that will be stored, assigning a fresh id.
    pub fn into_account(self, now: DateTime<Utc>) -> Account {
        Account {
            id: AccountId::new(),
            email: self.email,
            password_hash: self.password_hash,
            roles: self.roles.into_iter().collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_account_dedups_roles() {
        let roles: BTreeSet<_> = [AccountRole::Admin, AccountRole::User, AccountRole::Admin]
            .into_iter()
            .collect();
        let account = NewAccount {
            email: "keesun@email.com".to_string(),
            password_hash: "hash".to_string(),
            roles,
        }
        .into_account(Utc::now());

        assert_eq!(account.roles, vec![AccountRole::User, AccountRole::Admin]);
        assert!(account.is_admin());
        assert!(account.has_role(AccountRole::User));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let account = NewAccount {
            email: "keesun@email.com".to_string(),
            password_hash: "secret-hash".to_string(),
            roles: BTreeSet::new(),
        }
        .into_account(Utc::now());

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["roles"], serde_json::json!([]));
    }
}
