//! Request context carrying the authenticated account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_core::types::AccountId;
use eventhub_entity::account::{Account, AccountRole};
use eventhub_entity::event::Event;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer for every request that carries valid
/// credentials and passed into service methods explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: AccountId,
    /// The account's login email.
    pub email: String,
    /// Roles held at the time of the request.
    pub roles: Vec<AccountRole>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for the given account.
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.id,
            email: account.email.clone(),
            roles: account.roles.clone(),
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current account is an admin.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&AccountRole::Admin)
    }

    /// Returns whether the current account published the event.
    pub fn is_publisher_of(&self, event: &Event) -> bool {
        event.publisher_id == Some(self.account_id)
    }
}
