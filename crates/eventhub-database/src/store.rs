//! Store traits the service layer depends on.
//!
//! Two implementations exist for each: a PostgreSQL repository in
//! [`crate::repositories`] and an in-memory store in [`crate::memory`].

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AccountId, EventId};
use eventhub_entity::account::Account;
use eventhub_entity::event::Event;

/// Persistence for accounts.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>>;

    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Insert a new account. Fails with `Conflict` on a duplicate email.
    async fn create(&self, account: &Account) -> AppResult<Account>;
}

/// Persistence for events.
#[async_trait]
pub trait EventStore: Send + Sync + 'static {
    /// Find an event by primary key.
    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>>;

    /// List events ordered by date, then id.
    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Event>>;

    /// Insert a new event and return the stored row.
    async fn create(&self, event: &Event) -> AppResult<Event>;

    /// Overwrite a stored event. Fails with `NotFound` when it does not exist.
    async fn update(&self, event: &Event) -> AppResult<Event>;
}
