//! Response DTOs.
//!
//! Event payloads follow the HAL convention: resource fields at the top
//! level and relations under `_links`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_core::types::pagination::PageResponse;
use eventhub_core::types::{AccountId, EventId};
use eventhub_entity::account::{Account, AccountRole};
use eventhub_entity::event::{Event, EventStatus};

/// Base path of the events collection.
pub const EVENTS_PATH: &str = "/api/events";

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target of the link.
    pub href: String,
}

/// Relations keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links(pub BTreeMap<String, Link>);

impl Links {
    /// Creates an empty link set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relation, replacing any previous link with the same name.
    pub fn with(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.0.insert(rel.to_string(), Link { href: href.into() });
        self
    }

    /// Whether a relation is present.
    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }
}

/// Path of a single event.
pub fn event_href(id: EventId) -> String {
    format!("{EVENTS_PATH}/{id}")
}

/// Documentation anchor for an event operation.
pub fn profile_href(operation: &str) -> String {
    format!("/docs/index.html#resources-events-{operation}")
}

/// Event fields as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub price: i32,
    pub date: DateTime<Utc>,
    pub free: bool,
    pub online: bool,
    pub status: EventStatus,
    /// Id of the publishing account, if any.
    pub publisher: Option<AccountId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventBody {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            location: e.location,
            price: e.price,
            date: e.date,
            free: e.free,
            online: e.online,
            status: e.status,
            publisher: e.publisher_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// An event with its `_links`. Always carries `self`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: EventBody,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl EventResponse {
    /// Wraps an event with its `self` link.
    pub fn new(event: Event) -> Self {
        let links = Links::new().with("self", event_href(event.id));
        Self {
            event: event.into(),
            links,
        }
    }

    /// Adds a relation.
    pub fn with_link(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.links = self.links.with(rel, href);
        self
    }
}

/// Embedded collection of a paged response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedEvents {
    pub events: Vec<EventResponse>,
}

/// Paging metadata. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// A page of events with navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedEventsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedEvents,
    #[serde(rename = "_links")]
    pub links: Links,
    pub page: PageMetadata,
}

impl PagedEventsResponse {
    /// Builds the response, adding `first`/`prev`/`next`/`last` links where
    /// they lead somewhere.
    pub fn from_page(page: PageResponse<Event>) -> Self {
        let page = page.map(EventResponse::new);
        let size = page.page_size;
        let href = |n: u64| format!("{EVENTS_PATH}?page={n}&size={size}");

        let mut links = Links::new().with("self", href(page.page));
        if page.total_pages > 0 {
            links = links
                .with("first", href(1))
                .with("last", href(page.total_pages));
        }
        if page.has_previous() {
            links = links.with("prev", href(page.page - 1));
        }
        if page.has_next() {
            links = links.with("next", href(page.page + 1));
        }
        links = links.with("profile", profile_href("list"));

        Self {
            links,
            page: PageMetadata {
                size,
                total_elements: page.total_items,
                total_pages: page.total_pages,
                number: page.page,
            },
            embedded: EmbeddedEvents { events: page.items },
        }
    }
}

/// Account summary. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: AccountId,
    pub email: String,
    pub roles: Vec<AccountRole>,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            roles: a.roles,
            created_at: a.created_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::types::pagination::PageRequest;
    use eventhub_entity::event::EventDto;

    fn event() -> Event {
        let dto = EventDto {
            name: "Spring".to_string(),
            description: "REST".to_string(),
            price: 0,
            ..Default::default()
        };
        Event::from_dto(&dto, None, Utc::now())
    }

    #[test]
    fn test_event_response_shape() {
        let e = event();
        let id = e.id;
        let json = serde_json::to_value(EventResponse::new(e).with_link("events", EVENTS_PATH))
            .unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["free"], true);
        assert_eq!(json["online"], true);
        assert_eq!(json["status"], "DRAFT");
        assert_eq!(json["_links"]["self"]["href"], format!("/api/events/{id}"));
        assert_eq!(json["_links"]["events"]["href"], "/api/events");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_page_links() {
        let req = PageRequest::new(2, 10);
        let items = (0..10).map(|_| event()).collect();
        let paged = PagedEventsResponse::from_page(PageResponse::new(items, &req, 30));

        assert_eq!(paged.page.number, 2);
        assert_eq!(paged.page.total_pages, 3);
        assert!(paged.links.contains("prev"));
        assert!(paged.links.contains("next"));
        assert_eq!(paged.links.0["last"].href, "/api/events?page=3&size=10");
        assert_eq!(paged.embedded.events.len(), 10);
    }

    #[test]
    fn test_empty_page_has_no_navigation() {
        let paged = PagedEventsResponse::from_page(PageResponse::new(
            Vec::new(),
            &PageRequest::default(),
            0,
        ));
        assert!(paged.links.contains("self"));
        assert!(!paged.links.contains("first"));
        assert!(!paged.links.contains("next"));
        assert_eq!(paged.page.total_elements, 0);
    }
}
