//! Shared test helpers for integration tests.
//!
//! The router under test is the production one, wired to in-memory
//! stores so no database is required.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Duration, Utc};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use eventhub_api::{AppState, build_router};
use eventhub_auth::{Argon2Hasher, AuthGate, PasswordHasher};
use eventhub_core::config::{AppConfig, AuthConfig};
use eventhub_core::types::AccountId;
use eventhub_database::{EventStore, MemoryAccountStore, MemoryEventStore};
use eventhub_entity::account::Account;
use eventhub_entity::event::{Event, EventDto};
use eventhub_service::{AccountService, EventService};

/// Password used for every account created through [`TestApp::create_account`].
pub const PASSWORD: &str = "pass1234";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Event store backing the router
    pub events: Arc<MemoryEventStore>,
    /// Account registration service
    pub accounts: Arc<AccountService>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = Arc::new(AppConfig {
            auth: AuthConfig {
                argon2_memory_kib: 1024,
                argon2_iterations: 1,
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        });
        let account_store = Arc::new(MemoryAccountStore::new());
        let event_store = Arc::new(MemoryEventStore::new());
        let hasher: Arc<dyn PasswordHasher> = Arc::new(
            Argon2Hasher::from_config(&config.auth).expect("Failed to build hasher"),
        );

        let auth_gate = Arc::new(AuthGate::new(account_store.clone(), Arc::clone(&hasher)));
        let event_service = Arc::new(EventService::new(event_store.clone()));
        let account_service = Arc::new(AccountService::new(
            account_store,
            hasher,
            config.auth.password_min_length,
        ));

        let state = AppState::new(config, auth_gate, event_service, Arc::clone(&account_service));

        Self {
            router: build_router(state),
            events: event_store,
            accounts: account_service,
        }
    }

    /// Register a `USER` account with [`PASSWORD`].
    pub async fn create_account(&self, email: &str) -> Account {
        self.accounts
            .register(email, PASSWORD)
            .await
            .expect("Failed to create test account")
    }

    /// Seed an `ADMIN` account with [`PASSWORD`], the way startup does.
    pub async fn create_admin(&self, email: &str) -> Account {
        self.accounts
            .seed_admin(email, PASSWORD)
            .await
            .expect("Failed to seed test admin")
    }

    /// Insert an event directly into the store, `days` days from now.
    pub async fn seed_event(&self, index: i64, publisher: Option<AccountId>) -> Event {
        let dto = EventDto {
            name: format!("event {index}"),
            description: "test event".to_string(),
            location: Some("korea".to_string()),
            price: 100,
            date: Some(Utc::now() + Duration::days(index + 1)),
        };
        let event = Event::from_dto(&dto, publisher, Utc::now());
        self.events
            .create(&event)
            .await
            .expect("Failed to seed event")
    }

    /// Make a request; `auth` is an `(email, password)` pair sent as Basic credentials.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Option<(&str, &str)>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some((email, password)) = auth {
            let encoded = BASE64.encode(format!("{email}:{password}"));
            req = req.header("Authorization", format!("Basic {encoded}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A valid event payload dated one day ahead.
pub fn event_payload(location: &str, price: i32) -> Value {
    serde_json::json!({
        "name": "Spring",
        "description": "REST API Development with Spring",
        "location": location,
        "price": price,
        "date": (Utc::now() + Duration::days(1)).to_rfc3339(),
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Whether `_links` carries the given relation.
    pub fn has_link(&self, rel: &str) -> bool {
        self.body["_links"].get(rel).is_some()
    }
}
