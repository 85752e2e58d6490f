//! Resolves the calling account from Basic credentials.

use std::sync::Arc;

use http::HeaderValue;
use tracing::{debug, warn};

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::store::AccountStore;
use eventhub_entity::account::Account;

use crate::basic::BasicCredentials;
use crate::password::PasswordHasher;

/// Turns request credentials into the current account.
///
/// Stateless: the same credentials always resolve to the same result
/// for a given store state.
#[derive(Clone)]
pub struct AuthGate {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate").finish_non_exhaustive()
    }
}

impl AuthGate {
    /// Creates a gate over the given account store.
    pub fn new(accounts: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    /// Resolve a caller from an email and raw password.
    ///
    /// No credentials at all resolve to `None` (anonymous). Partial
    /// credentials, an unknown email, or a wrong password fail with
    /// an authentication error.
    pub async fn resolve_caller(
        &self,
        email: Option<&str>,
        raw_password: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let (email, raw_password) = match (email, raw_password) {
            (None, None) => return Ok(None),
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::authentication("Incomplete credentials")),
        };

        let Some(account) = self.accounts.find_by_email(email).await? else {
            debug!(email = %email, "Unknown account");
            return Err(AppError::authentication("Invalid credentials"));
        };

        if !self.hasher.verify(raw_password, &account.password_hash)? {
            warn!(account_id = %account.id, "Password mismatch");
            return Err(AppError::authentication("Invalid credentials"));
        }

        Ok(Some(account))
    }

    /// Resolve a caller from an optional `Authorization` header.
    pub async fn resolve_header(&self, header: Option<&HeaderValue>) -> AppResult<Option<Account>> {
        match header {
            None => Ok(None),
            Some(value) => {
                let creds = BasicCredentials::from_header(value)?;
                self.resolve_caller(Some(&creds.email), Some(&creds.password))
                    .await
            }
        }
    }
}
