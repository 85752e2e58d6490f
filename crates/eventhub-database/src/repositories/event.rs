//! Event repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::types::EventId;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_entity::event::Event;

use crate::store::EventStore;

/// Repository for event persistence.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by id", e)
            })
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events ORDER BY date ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        debug!(page = page.page, returned = events.len(), total, "Listed events");
        Ok(PageResponse::new(events, page, u64::try_from(total).unwrap_or_default()))
    }

    async fn create(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, name, description, location, price, date, free, online, \
                                 status, publisher_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.price)
        .bind(event.date)
        .bind(event.free)
        .bind(event.online)
        .bind(event.status)
        .bind(event.publisher_id)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    async fn update(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET name = $2, description = $3, location = $4, price = $5, \
                               date = $6, free = $7, online = $8, status = $9, \
                               updated_at = $10 \
             WHERE id = $1 RETURNING *",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.price)
        .bind(event.date)
        .bind(event.free)
        .bind(event.online)
        .bind(event.status)
        .bind(event.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", event.id)))
    }
}
