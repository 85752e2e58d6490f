//! Integration tests for the event endpoints.

mod helpers;

use eventhub_core::types::EventId;
use helpers::{PASSWORD, TestApp, event_payload};
use http::StatusCode;
use serde_json::json;

const KEESUN: &str = "keesun@email.com";
const OTHER: &str = "other@email.com";

#[tokio::test]
async fn test_create_event() {
    let app = TestApp::new();
    let account = app.create_account(KEESUN).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_payload("korea", 0)),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().expect("id").to_string();
    assert_eq!(response.headers["location"], format!("/api/events/{id}"));
    assert_eq!(response.body["free"], true);
    assert_eq!(response.body["online"], false);
    assert_eq!(response.body["status"], "DRAFT");
    assert_eq!(response.body["publisher"], account.id.to_string());
    for rel in ["self", "events", "update", "profile"] {
        assert!(response.has_link(rel), "missing link {rel}");
    }
}

#[tokio::test]
async fn test_create_paid_online_event() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_payload("", 1000)),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["free"], false);
    assert_eq!(response.body["online"], true);
}

#[tokio::test]
async fn test_create_event_empty_input() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request("POST", "/api/events", Some(json!({})), Some((KEESUN, PASSWORD)))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body.as_array().expect("error array");
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(fields, vec!["description", "name"]);
    for error in errors {
        assert_eq!(error["objectName"], "eventDto");
        assert!(error["defaultMessage"].is_string());
        assert!(error["code"].is_string());
        assert_eq!(error["rejectedValue"], "");
    }
}

#[tokio::test]
async fn test_create_event_wrong_input() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({
                "name": "Spring",
                "description": "REST",
                "price": -1,
                "date": "2018-11-23T14:21:00Z",
            })),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body.as_array().expect("error array");
    let date = errors
        .iter()
        .find(|e| e["field"] == "date")
        .expect("date error");
    assert_eq!(date["code"], "wrong.value");
    assert_eq!(date["rejectedValue"], "2018-11-23T14:21:00+00:00");
    assert!(errors.iter().any(|e| e["field"] == "price"));
}

#[tokio::test]
async fn test_create_event_malformed_json() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({ "price": "free" })),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_event_anonymous() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/events", Some(event_payload("korea", 0)), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers["www-authenticate"],
        "Basic realm=\"eventhub\""
    );
}

#[tokio::test]
async fn test_create_event_wrong_password() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_payload("korea", 0)),
            Some((KEESUN, "wrong")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_query_events() {
    let app = TestApp::new();
    for i in 0..20 {
        app.seed_event(i, None).await;
    }

    let response = app.request("GET", "/api/events?page=1&size=10", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"]["size"], 10);
    assert_eq!(response.body["page"]["totalElements"], 20);
    assert_eq!(response.body["page"]["totalPages"], 2);
    assert_eq!(response.body["page"]["number"], 1);

    let events = response.body["_embedded"]["events"]
        .as_array()
        .expect("events");
    assert_eq!(events.len(), 10);
    assert_eq!(events[0]["name"], "event 0");
    assert!(events.iter().all(|e| e["_links"]["self"].is_object()));
    assert!(response.has_link("next"));
    assert!(!response.has_link("prev"));

    let second = app.request("GET", "/api/events?page=2&size=10", None, None).await;
    let events = second.body["_embedded"]["events"].as_array().expect("events");
    assert_eq!(events[0]["name"], "event 10");
    assert!(!second.has_link("next"));
}

#[tokio::test]
async fn test_query_events_huge_page_number() {
    let app = TestApp::new();
    app.seed_event(0, None).await;

    let response = app
        .request("GET", "/api/events?page=18446744073709551615", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"]["number"], u64::MAX);
    assert_eq!(response.body["page"]["totalElements"], 1);
    let events = response.body["_embedded"]["events"]
        .as_array()
        .expect("events");
    assert!(events.is_empty());
    assert!(response.has_link("prev"));
    assert!(!response.has_link("next"));
}

#[tokio::test]
async fn test_get_event() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;
    let event = app.seed_event(0, None).await;
    let path = format!("/api/events/{}", event.id);

    let anonymous = app.request("GET", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["name"], "event 0");
    assert!(anonymous.has_link("self"));
    assert!(anonymous.has_link("events"));
    assert!(anonymous.has_link("profile"));
    assert!(!anonymous.has_link("update"));

    let authenticated = app.request("GET", &path, None, Some((KEESUN, PASSWORD))).await;
    assert_eq!(authenticated.status, StatusCode::OK);
    assert!(authenticated.has_link("update"));
}

#[tokio::test]
async fn test_get_missing_event() {
    let app = TestApp::new();

    let response = app
        .request("GET", &format!("/api/events/{}", EventId::new()), None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_event_id() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let get = app.request("GET", "/api/events/not-a-uuid", None, None).await;
    assert_eq!(get.status, StatusCode::BAD_REQUEST);
    assert_eq!(get.body["error"], "VALIDATION_ERROR");
    assert!(get.body["message"].is_string());

    let put = app
        .request(
            "PUT",
            "/api/events/not-a-uuid",
            Some(event_payload("korea", 0)),
            Some((KEESUN, PASSWORD)),
        )
        .await;
    assert_eq!(put.status, StatusCode::BAD_REQUEST);
    assert_eq!(put.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_event() {
    let app = TestApp::new();
    let account = app.create_account(KEESUN).await;
    let event = app.seed_event(0, Some(account.id)).await;

    let mut payload = event_payload("", 0);
    payload["name"] = json!("Updated Event");

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", event.id),
            Some(payload),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Updated Event");
    assert_eq!(response.body["free"], true);
    assert_eq!(response.body["online"], true);
    assert!(response.has_link("self"));
    assert!(response.has_link("events"));
}

#[tokio::test]
async fn test_update_event_by_other_account() {
    let app = TestApp::new();
    let owner = app.create_account(KEESUN).await;
    app.create_admin(OTHER).await;
    let event = app.seed_event(0, Some(owner.id)).await;
    let path = format!("/api/events/{}", event.id);

    let response = app
        .request("PUT", &path, Some(event_payload("japan", 5)), Some((OTHER, PASSWORD)))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let unchanged = app.request("GET", &path, None, None).await;
    assert_eq!(unchanged.body["name"], "event 0");
    assert_eq!(unchanged.body["price"], 100);
}

#[tokio::test]
async fn test_update_event_anonymous() {
    let app = TestApp::new();
    let owner = app.create_account(KEESUN).await;
    let event = app.seed_event(0, Some(owner.id)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", event.id),
            Some(event_payload("japan", 5)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_event_invalid_input() {
    let app = TestApp::new();
    let owner = app.create_account(KEESUN).await;
    let event = app.seed_event(0, Some(owner.id)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", event.id),
            Some(json!({})),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.is_array());
}

#[tokio::test]
async fn test_update_missing_event() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", EventId::new()),
            Some(event_payload("korea", 0)),
            Some((KEESUN, PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_ownerless_event_requires_admin() {
    let app = TestApp::new();
    app.create_account(KEESUN).await;
    app.create_admin(OTHER).await;
    let event = app.seed_event(0, None).await;
    let path = format!("/api/events/{}", event.id);

    let user = app
        .request("PUT", &path, Some(event_payload("korea", 0)), Some((KEESUN, PASSWORD)))
        .await;
    assert_eq!(user.status, StatusCode::FORBIDDEN);

    let admin = app
        .request("PUT", &path, Some(event_payload("korea", 0)), Some((OTHER, PASSWORD)))
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["free"], true);
}
