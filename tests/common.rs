use events_backend::{
    api::router::create_router,
    config::Config,
    domain::models::supervisor::Supervisor,
    domain::ports::EmailService,
    domain::services::auth_service::AuthService,
    error::ApiError,
    infra::repositories::{
        sqlite_manager_repo::SqliteManagerRepo,
        sqlite_participant_repo::SqliteParticipantRepo,
        sqlite_private_event_repo::SqlitePrivateEventRepo,
        sqlite_public_event_repo::SqlitePublicEventRepo,
        sqlite_report_repo::SqliteReportRepo,
        sqlite_supervisor_repo::SqliteSupervisorRepo,
    },
    state::AppState,
};
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use rand::rngs::OsRng;
use serde_json::{json, Value};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Captures outgoing mail so tests can assert on it (and read the generated
/// manager credential from the approval message).
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), ApiError> {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub mailbox: Arc<RecordingEmailService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
            supervisor_email: None,
            supervisor_password: None,
        };

        let mailbox = Arc::new(RecordingEmailService { sent: Mutex::new(Vec::new()) });

        let state = Arc::new(AppState {
            config: config.clone(),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            private_event_repo: Arc::new(SqlitePrivateEventRepo::new(pool.clone())),
            manager_repo: Arc::new(SqliteManagerRepo::new(pool.clone())),
            supervisor_repo: Arc::new(SqliteSupervisorRepo::new(pool.clone())),
            public_event_repo: Arc::new(SqlitePublicEventRepo::new(pool.clone())),
            report_repo: Arc::new(SqliteReportRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(&config)),
            email_service: mailbox.clone(),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            mailbox,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, body_json)
    }

    /// Sends the Authorization header verbatim, without the Bearer scheme.
    pub async fn request_with_raw_auth(&self, method: &str, uri: &str, auth_header: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, auth_header)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, body_json)
    }

    /// Registers a participant with a password credential; returns the new id.
    pub async fn register_participant(&self, name: &str, username: &str, email: &str, password: &str) -> String {
        let payload = json!({
            "name": name,
            "surname": "Test",
            "username": username,
            "email": email,
            "password": password
        });

        let (status, body) = self.request("POST", "/v1/users", None, Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "registration failed: {}", body);
        assert_eq!(body["success"], true, "registration failed: {}", body);

        body["user"]["id"].as_str().unwrap().to_string()
    }

    pub async fn login_participant(&self, username: &str, password: &str) -> String {
        let payload = json!({ "username": username, "password": password });

        let (status, body) = self.request("POST", "/v1/users/login", None, Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        assert_eq!(body["success"], true, "login failed: {}", body);

        body["token"].as_str().unwrap().to_string()
    }

    /// Inserts a supervisor directly (they are seeded, not self-registered)
    /// and logs them in through the API.
    pub async fn create_supervisor(&self, email: &str, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();

        let supervisor = Supervisor::new("admin".to_string(), email.to_string(), password_hash);
        self.state.supervisor_repo.create(&supervisor).await.unwrap();

        let payload = json!({ "email": email, "password": password });
        let (status, body) = self.request("POST", "/v1/supervisors/login", None, Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "supervisor login failed: {}", body);

        body["token"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
