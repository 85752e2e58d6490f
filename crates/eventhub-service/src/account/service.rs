//! Account registration and profile lookup.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use eventhub_auth::password::PasswordHasher;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::AccountId;
use eventhub_database::store::AccountStore;
use eventhub_entity::account::{Account, AccountRole, NewAccount};

/// Registers accounts and looks them up.
#[derive(Clone)]
pub struct AccountService {
    /// Account store.
    accounts: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<dyn PasswordHasher>,
    /// Minimum accepted raw password length, in characters.
    password_min_length: usize,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("password_min_length", &self.password_min_length)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        password_min_length: usize,
    ) -> Self {
        Self {
            accounts,
            hasher,
            password_min_length,
        }
    }

    /// Self-register a new account. Always grants `USER` and nothing else.
    ///
    /// Fails with a validation error for a malformed email or a short
    /// password and with a conflict when the email is taken.
    pub async fn register(&self, email: &str, raw_password: &str) -> AppResult<Account> {
        self.create(email, raw_password, [AccountRole::User].into())
            .await
    }

    /// Ensure the configured administrator exists.
    ///
    /// An account already holding the email is returned untouched.
    pub async fn seed_admin(&self, email: &str, raw_password: &str) -> AppResult<Account> {
        if let Some(existing) = self.accounts.find_by_email(email.trim()).await? {
            if !existing.is_admin() {
                warn!(
                    account_id = %existing.id,
                    "Seed admin email belongs to a non-admin account"
                );
            }
            return Ok(existing);
        }

        self.create(
            email,
            raw_password,
            [AccountRole::Admin, AccountRole::User].into(),
        )
        .await
    }

    async fn create(
        &self,
        email: &str,
        raw_password: &str,
        roles: BTreeSet<AccountRole>,
    ) -> AppResult<Account> {
        let email = email.trim();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        if raw_password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let password_hash = self.hasher.hash(raw_password)?;
        let account = NewAccount {
            email: email.to_string(),
            password_hash,
            roles,
        }
        .into_account(Utc::now());

        let saved = self.accounts.create(&account).await?;
        info!(account_id = %saved.id, roles = ?saved.roles, "Account registered");
        Ok(saved)
    }

    /// Fetch an account by id.
    pub async fn get(&self, id: AccountId) -> AppResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")))
    }
}
