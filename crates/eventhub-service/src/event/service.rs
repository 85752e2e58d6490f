//! Event lifecycle: creation, lookup, listing, and owner-gated updates.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::EventId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_database::store::EventStore;
use eventhub_entity::event::{Event, EventDto};

use crate::context::RequestContext;

use super::validator::EventValidator;

/// Creates and mutates events on behalf of callers.
///
/// DTOs passed to [`create`](Self::create) and [`update`](Self::update)
/// are expected to have passed [`EventValidator`] already.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    validator: EventValidator,
}

impl std::fmt::Debug for EventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventService").finish_non_exhaustive()
    }
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self {
            events,
            validator: EventValidator::new(),
        }
    }

    /// The validator applied to inbound DTOs.
    pub fn validator(&self) -> &EventValidator {
        &self.validator
    }

    /// Persist a new event built from `dto`.
    ///
    /// The caller, if any, becomes the publisher. Derived flags are
    /// computed before the write so the stored row is consistent.
    pub async fn create(&self, ctx: Option<&RequestContext>, dto: &EventDto) -> AppResult<Event> {
        let publisher = ctx.map(|c| c.account_id);
        let event = Event::from_dto(dto, publisher, Utc::now());
        let saved = self.events.create(&event).await?;

        info!(
            event_id = %saved.id,
            publisher = ?saved.publisher_id,
            free = saved.free,
            online = saved.online,
            "Event created"
        );
        Ok(saved)
    }

    /// Fetch a single event.
    pub async fn get(&self, id: EventId) -> AppResult<Event> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))
    }

    /// List events by date.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        self.events.find_page(page).await
    }

    /// Overlay `dto` onto an existing event.
    ///
    /// Fails with not-found for an unknown id and with an authorization
    /// error when the caller may not edit the event; nothing is written
    /// in either case.
    pub async fn update(
        &self,
        id: EventId,
        ctx: Option<&RequestContext>,
        dto: &EventDto,
    ) -> AppResult<Event> {
        let mut event = self.get(id).await?;

        if let Err(e) = ensure_can_update(&event, ctx) {
            warn!(
                event_id = %id,
                caller = ?ctx.map(|c| c.account_id),
                publisher = ?event.publisher_id,
                "Event update rejected"
            );
            return Err(e);
        }

        event.apply(dto, Utc::now());
        let saved = self.events.update(&event).await?;

        info!(event_id = %saved.id, free = saved.free, online = saved.online, "Event updated");
        Ok(saved)
    }
}

/// Decide whether `caller` may edit `event`.
///
/// An owned event is editable only by its publisher. An event without a
/// publisher is editable only by an admin.
pub fn ensure_can_update(event: &Event, caller: Option<&RequestContext>) -> AppResult<()> {
    let allowed = match (event.publisher_id, caller) {
        (Some(_), Some(ctx)) => ctx.is_publisher_of(event),
        (None, Some(ctx)) => ctx.is_admin(),
        (_, None) => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::authorization(format!(
            "Not allowed to update event {}",
            event.id
        )))
    }
}
