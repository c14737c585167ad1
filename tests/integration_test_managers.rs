mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn submit_signup(app: &TestApp, email: &str) -> String {
    let payload = json!({
        "name": "Club Nettuno",
        "email": email,
        "localType": "DISCO",
        "address": { "country": "IT", "city": "Rimini", "street": "Viale Mare", "number": "3", "postalCode": "47900" }
    });

    let (status, body) = app.request("POST", "/v1/managers", None, Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "signup failed: {}", body);
    assert_eq!(body["success"], true);
    assert_eq!(body["manager"]["approved"], serde_json::Value::Null);

    body["manager"]["id"].as_str().unwrap().to_string()
}

fn password_from_approval_mail(body: &str) -> String {
    body.split("Password: ")
        .nth(1)
        .expect("approval mail carries the generated password")
        .split('<')
        .next()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_manager_approval_flow_issues_working_credential() {
    let app = TestApp::new().await;

    let manager_id = submit_signup(&app, "club@example.com").await;
    let supervisor_token = app.create_supervisor("boss@example.com", "sup-password").await;

    // the request shows up in the pending list
    let (_, body) = app.request("GET", "/v1/supervisors/requests", Some(&supervisor_token), None).await;
    let requests = body["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["id"], manager_id.as_str());

    // approval generates and mails the credential
    let (status, body) = app.request(
        "PUT", &format!("/v1/supervisors/requests/{}", manager_id), Some(&supervisor_token),
        Some(json!({ "approve": true })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let password = {
        let sent = app.mailbox.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "club@example.com");
        password_from_approval_mail(&sent[0].body)
    };

    let (status, body) = app.request(
        "POST", "/v1/managers/login", None,
        Some(json!({ "email": "club@example.com", "password": password })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let manager_token = body["token"].as_str().unwrap().to_string();

    let (_, body) = app.request("GET", "/v1/users/me", Some(&manager_token), None).await;
    assert_eq!(body["role"], "Manager");
    assert_eq!(body["user"]["id"], manager_id.as_str());

    // decided requests leave the pending list
    let (_, body) = app.request("GET", "/v1/supervisors/requests", Some(&supervisor_token), None).await;
    assert!(body["requests"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_undecided_manager_cannot_login() {
    let app = TestApp::new().await;

    submit_signup(&app, "club@example.com").await;

    let (status, body) = app.request(
        "POST", "/v1/managers/login", None,
        Some(json!({ "email": "club@example.com", "password": "whatever" })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Your signup request has not been decided yet");
}

#[tokio::test]
async fn test_denied_manager_cannot_login_and_gets_no_mail() {
    let app = TestApp::new().await;

    let manager_id = submit_signup(&app, "club@example.com").await;
    let supervisor_token = app.create_supervisor("boss@example.com", "sup-password").await;

    let (_, body) = app.request(
        "PUT", &format!("/v1/supervisors/requests/{}", manager_id), Some(&supervisor_token),
        Some(json!({ "approve": false })),
    ).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Signup request denied");
    assert!(app.mailbox.sent.lock().unwrap().is_empty());

    let (_, body) = app.request(
        "POST", "/v1/managers/login", None,
        Some(json!({ "email": "club@example.com", "password": "whatever" })),
    ).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Your signup request was denied");
}

#[tokio::test]
async fn test_request_can_be_decided_only_once() {
    let app = TestApp::new().await;

    let manager_id = submit_signup(&app, "club@example.com").await;
    let supervisor_token = app.create_supervisor("boss@example.com", "sup-password").await;

    app.request(
        "PUT", &format!("/v1/supervisors/requests/{}", manager_id), Some(&supervisor_token),
        Some(json!({ "approve": false })),
    ).await;

    let (status, body) = app.request(
        "PUT", &format!("/v1/supervisors/requests/{}", manager_id), Some(&supervisor_token),
        Some(json!({ "approve": true })),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "This signup request has already been decided");
}

#[tokio::test]
async fn test_signup_validations() {
    let app = TestApp::new().await;

    // missing localType is reported by name
    let (status, body) = app.request(
        "POST", "/v1/managers", None,
        Some(json!({ "name": "Club", "email": "club@example.com" })),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: localType");

    let (_, body) = app.request(
        "POST", "/v1/managers", None,
        Some(json!({ "name": "Club", "email": "club@example.com", "localType": "CASINO" })),
    ).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid localType");

    submit_signup(&app, "club@example.com").await;
    let (_, body) = app.request(
        "POST", "/v1/managers", None,
        Some(json!({ "name": "Club2", "email": "club@example.com", "localType": "BAR" })),
    ).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn test_pending_list_is_supervisor_only() {
    let app = TestApp::new().await;

    app.register_participant("Ada", "ada", "ada@example.com", "secret").await;
    let participant_token = app.login_participant("ada", "secret").await;

    let (status, _) = app.request("GET", "/v1/supervisors/requests", Some(&participant_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
