//! In-memory stores guarded by Tokio read/write locks.
//!
//! Suitable for single-node runs without a database and for tests.
//! Data does not survive a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_core::types::{AccountId, EventId};
use eventhub_entity::account::Account;
use eventhub_entity::event::Event;

use crate::store::{AccountStore, EventStore};

/// In-memory account store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, account: &Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&account.email))
        {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                account.email
            )));
        }
        accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }
}

/// In-memory event store.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
}

impl MemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        let events = self.events.read().await;
        let mut all: Vec<&Event> = events.values().collect();
        all.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let items = all
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(PageResponse::new(items, page, events.len() as u64))
    }

    async fn create(&self, event: &Event) -> AppResult<Event> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(AppError::conflict(format!("Event {} already exists", event.id)));
        }
        events.insert(event.id, event.clone());
        Ok(event.clone())
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        let mut events = self.events.write().await;
        match events.get_mut(&event.id) {
            Some(stored) => {
                *stored = event.clone();
                Ok(event.clone())
            }
            None => Err(AppError::not_found(format!("Event {} not found", event.id))),
        }
    }
}
