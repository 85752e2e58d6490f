//! Event handlers.
//!
//! Every write validates the body before touching the service, so a bad
//! DTO is reported as a field error list even when the target event does
//! not exist.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};

use eventhub_core::types::EventId;
use eventhub_entity::event::EventDto;

use crate::dto::response::{
    EVENTS_PATH, EventResponse, PagedEventsResponse, event_href, profile_href,
};
use crate::error::ApiError;
use crate::extractors::{CurrentAccount, MaybeAccount, PaginationParams};
use crate::state::AppState;

fn validated(
    state: &AppState,
    payload: Result<Json<EventDto>, JsonRejection>,
) -> Result<EventDto, ApiError> {
    let Json(dto) = payload?;
    let errors = state.event_service.validator().validate(&dto);
    if errors.is_empty() {
        Ok(dto)
    } else {
        tracing::debug!(count = errors.len(), "Rejected event payload");
        Err(ApiError::Validation(errors))
    }
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    caller: CurrentAccount,
    payload: Result<Json<EventDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<EventResponse>), ApiError> {
    let dto = validated(&state, payload)?;
    let event = state.event_service.create(Some(caller.context()), &dto).await?;

    let location = event_href(event.id);
    let body = EventResponse::new(event)
        .with_link("events", EVENTS_PATH)
        .with_link("update", location.clone())
        .with_link("profile", profile_href("create"));

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(body)))
}

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedEventsResponse>, ApiError> {
    let page = params.into_page_request(&state.config.pagination);
    let events = state.event_service.list(&page).await?;
    Ok(Json(PagedEventsResponse::from_page(events)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    caller: MaybeAccount,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<Json<EventResponse>, ApiError> {
    let Path(id) = path?;
    let event = state.event_service.get(id).await?;

    let mut body = EventResponse::new(event)
        .with_link("events", EVENTS_PATH)
        .with_link("profile", profile_href("read"));
    if caller.context().is_some() {
        body = body.with_link("update", event_href(id));
    }

    Ok(Json(body))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    caller: CurrentAccount,
    path: Result<Path<EventId>, PathRejection>,
    payload: Result<Json<EventDto>, JsonRejection>,
) -> Result<Json<EventResponse>, ApiError> {
    let Path(id) = path?;
    let dto = validated(&state, payload)?;
    let event = state
        .event_service
        .update(id, Some(caller.context()), &dto)
        .await?;

    Ok(Json(EventResponse::new(event).with_link("events", EVENTS_PATH)))
}
