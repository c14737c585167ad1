mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::json;

fn future_event_payload(description: &str) -> serde_json::Value {
    json!({
        "initDate": (Utc::now() + Duration::days(30)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(31)).to_rfc3339(),
        "description": description,
        "address": {
            "country": "IT",
            "city": "Milano",
            "street": "Via Roma",
            "number": "12",
            "postalCode": "20100"
        },
        "cost": 5.0
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let (status, _) = app.request("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_full_invitation_lifecycle() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let b_id = app.register_participant("Bob", "bob", "bob@example.com", "password-b").await;
    app.register_participant("Carol", "carol", "carol@example.com", "password-c").await;

    let token_a = app.login_participant("alice", "password-a").await;
    let token_b = app.login_participant("bob", "password-b").await;
    let token_c = app.login_participant("carol", "password-c").await;

    // Alice creates a private event
    let (status, body) = app.request(
        "POST", "/v1/private-events", Some(&token_a), Some(future_event_payload("ciao")),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let event_id = body["event"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["event"]["description"], "ciao");

    // Alice invites Bob by username
    let (status, body) = app.request(
        "PUT", &format!("/v1/private-events/{}/invite", event_id), Some(&token_a),
        Some(json!({ "users": ["bob"] })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["invited"], 1);

    // Bob's entry is Pending
    let (_, body) = app.request(
        "GET", &format!("/v1/private-events/{}", event_id), Some(&token_a), None,
    ).await;
    let participants = body["event"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["participantId"], b_id);
    assert_eq!(participants[0]["status"], "PENDING");
    assert_eq!(participants[0]["participant"]["username"], "bob");

    // Bob accepts
    let (status, body) = app.request(
        "PUT", &format!("/v1/private-events/{}/responde", event_id), Some(&token_b),
        Some(json!({ "accept": true })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = app.request(
        "GET", &format!("/v1/private-events/{}", event_id), Some(&token_b), None,
    ).await;
    assert_eq!(body["event"]["participants"][0]["status"], "ACCEPTED");

    // Carol was never invited
    let (status, body) = app.request(
        "PUT", &format!("/v1/private-events/{}/responde", event_id), Some(&token_c),
        Some(json!({ "accept": true })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You are not invited to this event");
}

#[tokio::test]
async fn test_create_rejects_end_before_start() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let token = app.login_participant("alice", "password-a").await;

    let payload = json!({
        "initDate": (Utc::now() + Duration::days(31)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(30)).to_rfc3339(),
        "description": "backwards"
    });

    let (status, body) = app.request("POST", "/v1/private-events", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You can't end an event before it started");

    // nothing was persisted
    let (_, body) = app.request("GET", "/v1/private-events", Some(&token), None).await;
    assert!(body["created"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_past_event() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let token = app.login_participant("alice", "password-a").await;

    let payload = json!({
        "initDate": (Utc::now() - Duration::days(2)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(1)).to_rfc3339(),
        "description": "yesterday"
    });

    let (status, body) = app.request("POST", "/v1/private-events", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You can't create an event in the past");
}

#[tokio::test]
async fn test_create_reports_first_missing_field() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let token = app.login_participant("alice", "password-a").await;

    let (status, body) = app.request(
        "POST", "/v1/private-events", Some(&token),
        Some(json!({ "description": "no dates" })),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: initDate");

    let (status, body) = app.request(
        "POST", "/v1/private-events", Some(&token),
        Some(json!({ "initDate": (Utc::now() + Duration::days(30)).to_rfc3339() })),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: endDate");

    // empty string is present, so the validator lets it through
    let (status, body) = app.request(
        "POST", "/v1/private-events", Some(&token),
        Some(json!({
            "initDate": (Utc::now() + Duration::days(30)).to_rfc3339(),
            "endDate": (Utc::now() + Duration::days(31)).to_rfc3339(),
            "description": ""
        })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_only_owner_can_edit_and_delete() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    app.register_participant("Bob", "bob", "bob@example.com", "password-b").await;
    let token_a = app.login_participant("alice", "password-a").await;
    let token_b = app.login_participant("bob", "password-b").await;

    let (_, body) = app.request(
        "POST", "/v1/private-events", Some(&token_a), Some(future_event_payload("mine")),
    ).await;
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    // even a listed participant may not edit or delete
    app.request(
        "PUT", &format!("/v1/private-events/{}/invite", event_id), Some(&token_a),
        Some(json!({ "users": ["bob"] })),
    ).await;

    let edit_payload = json!({
        "initDate": (Utc::now() + Duration::days(40)).to_rfc3339(),
        "endDate": (Utc::now() + Duration::days(41)).to_rfc3339(),
        "description": "hijacked"
    });

    let (status, body) = app.request(
        "PUT", &format!("/v1/private-events/{}", event_id), Some(&token_b), Some(edit_payload.clone()),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You are not the owner of this event");

    let (_, body) = app.request(
        "GET", &format!("/v1/private-events/{}", event_id), Some(&token_b), None,
    ).await;
    assert_eq!(body["event"]["description"], "mine");

    let (status, body) = app.request(
        "DELETE", &format!("/v1/private-events/{}", event_id), Some(&token_b), None,
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);

    // the owner can do both
    let (_, body) = app.request(
        "PUT", &format!("/v1/private-events/{}", event_id), Some(&token_a), Some(edit_payload),
    ).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["event"]["description"], "hijacked");

    let (_, body) = app.request(
        "DELETE", &format!("/v1/private-events/{}", event_id), Some(&token_a), None,
    ).await;
    assert_eq!(body["success"], true);

    let (_, body) = app.request(
        "GET", &format!("/v1/private-events/{}", event_id), Some(&token_a), None,
    ).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Private event not found");
}

#[tokio::test]
async fn test_delete_missing_event_is_not_found() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let token = app.login_participant("alice", "password-a").await;

    let (status, body) = app.request("DELETE", "/v1/private-events/no-such-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Private event not found");
}

#[tokio::test]
async fn test_listing_splits_created_and_invited() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    app.register_participant("Bob", "bob", "bob@example.com", "password-b").await;
    let token_a = app.login_participant("alice", "password-a").await;
    let token_b = app.login_participant("bob", "password-b").await;

    let (_, body) = app.request(
        "POST", "/v1/private-events", Some(&token_a), Some(future_event_payload("alice's")),
    ).await;
    let own_id = body["event"]["id"].as_str().unwrap().to_string();

    let (_, body) = app.request(
        "POST", "/v1/private-events", Some(&token_b), Some(future_event_payload("bob's")),
    ).await;
    let invited_id = body["event"]["id"].as_str().unwrap().to_string();

    app.request(
        "PUT", &format!("/v1/private-events/{}/invite", invited_id), Some(&token_b),
        Some(json!({ "users": ["alice"] })),
    ).await;

    let (_, body) = app.request("GET", "/v1/private-events", Some(&token_a), None).await;
    let created = body["created"].as_array().unwrap();
    let invited = body["invited"].as_array().unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["id"], own_id.as_str());
    assert_eq!(invited.len(), 1);
    assert_eq!(invited[0]["id"], invited_id.as_str());
}

#[tokio::test]
async fn test_get_requires_creator_or_invitee() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    app.register_participant("Carol", "carol", "carol@example.com", "password-c").await;
    let token_a = app.login_participant("alice", "password-a").await;
    let token_c = app.login_participant("carol", "password-c").await;

    let (_, body) = app.request(
        "POST", "/v1/private-events", Some(&token_a), Some(future_event_payload("secret")),
    ).await;
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.request(
        "GET", &format!("/v1/private-events/{}", event_id), Some(&token_c), None,
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "You don't have access to this event");
}

#[tokio::test]
async fn test_create_rejects_long_description_and_negative_cost() {
    let app = TestApp::new().await;

    app.register_participant("Alice", "alice", "alice@example.com", "password-a").await;
    let token = app.login_participant("alice", "password-a").await;

    let mut payload = future_event_payload(&"x".repeat(301));
    let (status, body) = app.request("POST", "/v1/private-events", Some(&token), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Description can't be longer than 300 characters");

    payload = future_event_payload("fine");
    payload["cost"] = json!(-1.0);
    let (_, body) = app.request("POST", "/v1/private-events", Some(&token), Some(payload)).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Cost can't be negative");
}
