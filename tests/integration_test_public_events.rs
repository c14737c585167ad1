mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use events_backend::domain::models::auth::Role;
use serde_json::json;

fn event_payload(description: &str) -> serde_json::Value {
    json!({
        "initDate": (Utc::now() + Duration::days(10)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(10) + Duration::hours(6)).to_rfc3339(),
        "description": description,
        "address": { "country": "IT", "city": "Bologna", "street": "Via Zamboni", "number": "1", "postalCode": "40126" },
        "cost": 12.5
    })
}

/// Signup + approval would work too; issuing the token directly keeps these
/// tests focused on the event endpoints.
fn manager_token(app: &TestApp, manager_id: &str) -> String {
    app.state.auth_service.issue(manager_id, Role::Manager).unwrap()
}

#[tokio::test]
async fn test_manager_creates_event_participants_can_read() {
    let app = TestApp::new().await;

    let token_m = manager_token(&app, "manager-1");

    let (status, body) = app.request("POST", "/v1/events", Some(&token_m), Some(event_payload("concert"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    app.register_participant("Ada", "ada", "ada@example.com", "secret").await;
    let token_p = app.login_participant("ada", "secret").await;

    let (_, body) = app.request("GET", "/v1/events", Some(&token_p), None).await;
    assert_eq!(body["events"].as_array().unwrap().len(), 1);

    let (_, body) = app.request("GET", &format!("/v1/events/{}", event_id), Some(&token_p), None).await;
    assert_eq!(body["event"]["description"], "concert");
    assert_eq!(body["event"]["managerId"], "manager-1");
}

#[tokio::test]
async fn test_participant_cannot_create_public_event() {
    let app = TestApp::new().await;

    app.register_participant("Ada", "ada", "ada@example.com", "secret").await;
    let token_p = app.login_participant("ada", "secret").await;

    let (status, _) = app.request("POST", "/v1/events", Some(&token_p), Some(event_payload("nope"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_only_owning_manager_can_edit_or_delete() {
    let app = TestApp::new().await;

    let token_m1 = manager_token(&app, "manager-1");
    let token_m2 = manager_token(&app, "manager-2");

    let (_, body) = app.request("POST", "/v1/events", Some(&token_m1), Some(event_payload("original"))).await;
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.request(
        "PUT", &format!("/v1/events/{}", event_id), Some(&token_m2), Some(event_payload("stolen")),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You are not the owner of this event");

    let (status, body) = app.request(
        "DELETE", &format!("/v1/events/{}", event_id), Some(&token_m2), None,
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);

    let (_, body) = app.request(
        "PUT", &format!("/v1/events/{}", event_id), Some(&token_m1), Some(event_payload("edited")),
    ).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["event"]["description"], "edited");

    let (_, body) = app.request(
        "DELETE", &format!("/v1/events/{}", event_id), Some(&token_m1), None,
    ).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_create_validates_dates_and_fields() {
    let app = TestApp::new().await;

    let token_m = manager_token(&app, "manager-1");

    let (status, body) = app.request(
        "POST", "/v1/events", Some(&token_m),
        Some(json!({ "endDate": (Utc::now() + Duration::days(1)).to_rfc3339(), "description": "x" })),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: initDate");

    let backwards = json!({
        "initDate": (Utc::now() + Duration::days(2)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(1)).to_rfc3339(),
        "description": "backwards"
    });
    let (_, body) = app.request("POST", "/v1/events", Some(&token_m), Some(backwards)).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You can't end an event before it started");
}
