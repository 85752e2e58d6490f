//! Integration tests for account registration and health.

mod helpers;

use helpers::{PASSWORD, TestApp};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_account() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/accounts",
            Some(json!({ "email": "keesun@email.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "keesun@email.com");
    assert_eq!(response.body["roles"], json!(["USER"]));
    assert!(response.body.get("passwordHash").is_none());
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.create_account("keesun@email.com").await;

    let response = app
        .request(
            "POST",
            "/api/accounts",
            Some(json!({ "email": "keesun@email.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/accounts",
            Some(json!({ "email": "keesun", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_registered_account_can_authenticate() {
    let app = TestApp::new();
    app.request(
        "POST",
        "/api/accounts",
        Some(json!({ "email": "new@email.com", "password": PASSWORD })),
        None,
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(helpers::event_payload("korea", 0)),
            Some(("new@email.com", PASSWORD)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_self_registration_cannot_claim_admin() {
    let app = TestApp::new();
    let event = app.seed_event(0, None).await;
    let path = format!("/api/events/{}", event.id);

    let registered = app
        .request(
            "POST",
            "/api/accounts",
            Some(json!({ "email": "mallory@email.com", "password": PASSWORD, "roles": ["ADMIN"] })),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED);
    assert_eq!(registered.body["roles"], json!(["USER"]));

    let response = app
        .request(
            "PUT",
            &path,
            Some(helpers::event_payload("seoul", 5000)),
            Some(("mallory@email.com", PASSWORD)),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let unchanged = app.request("GET", &path, None, None).await;
    assert_eq!(unchanged.body["location"], "korea");
    assert_eq!(unchanged.body["price"], 100);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
