//! Inbound event shape accepted by create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event fields as sent by a client, before conversion into an [`Event`].
///
/// A missing `date` stands for "now" and is resolved when the DTO is
/// applied, so it can never be in the past.
///
/// [`Event`]: super::Event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EventDto {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    /// Venue; absent or empty means the event is online.
    #[serde(default)]
    pub location: Option<String>,
    /// Ticket price; zero means the event is free.
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub price: i32,
    /// When the event takes place.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl EventDto {
    /// The effective event date, substituting `now` when none was sent.
    pub fn date_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.date.unwrap_or(now)
    }
}
