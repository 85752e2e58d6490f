//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::{AccountId, EventId};

use super::dto::EventDto;
use super::status::EventStatus;

/// A persisted event.
///
/// `free` and `online` are derived from `price` and `location`; every
/// constructor and mutator in this module keeps them in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Venue, if any.
    pub location: Option<String>,
    /// Ticket price.
    pub price: i32,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// True iff `price == 0`.
    pub free: bool,
    /// True iff `location` is absent or empty.
    pub online: bool,
    /// Publication state.
    pub status: EventStatus,
    /// Account that published the event.
    pub publisher_id: Option<AccountId>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build a new draft event from a DTO with a fresh id.
    pub fn from_dto(dto: &EventDto, publisher_id: Option<AccountId>, now: DateTime<Utc>) -> Self {
        let mut event = Self {
            id: EventId::new(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            location: dto.location.clone(),
            price: dto.price,
            date: dto.date_or(now),
            free: false,
            online: false,
            status: EventStatus::Draft,
            publisher_id,
            created_at: now,
            updated_at: now,
        };
        event.derive_flags();
        event
    }

    /// Overlay every DTO field onto this event and re-derive the flags.
    ///
    /// Identity, status, and publisher are left untouched.
    pub fn apply(&mut self, dto: &EventDto, now: DateTime<Utc>) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.location = dto.location.clone();
        self.price = dto.price;
        self.date = dto.date_or(now);
        self.updated_at = now;
        self.derive_flags();
    }

    /// Recompute `free` and `online` from `price` and `location`.
    pub fn derive_flags(&mut self) {
        self.free = self.price == 0;
        self.online = self.location.as_deref().is_none_or(str::is_empty);
    }
}
