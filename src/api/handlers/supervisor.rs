use axum::{extract::{Path, State}, response::IntoResponse, Json};
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use chrono::Utc;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dtos::{requests::{DecideRequest, EmailLoginRequest}, responses::ManagerView};
use crate::api::extractors::auth::AuthUser;
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&payload, &["email", "password"])?;

    let req: EmailLoginRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let supervisor = state.supervisor_repo.find_by_email(&req.email).await?
        .ok_or_else(|| ApiError::Rejection("Wrong email or password".into()))?;

    let parsed_hash = PasswordHash::new(&supervisor.password_hash)
        .map_err(|_| ApiError::Internal("stored password hash is invalid".into()))?;
    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Rejection("Wrong email or password".into()))?;

    let token = state.auth_service.issue(&supervisor.id, Role::Supervisor)?;

    info!("Supervisor logged in: {}", supervisor.id);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token
    })))
}

pub async fn list_requests(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Supervisor])?;

    let pending = state.manager_repo.list_pending().await?;

    Ok(Json(json!({
        "success": true,
        "requests": pending.iter().map(ManagerView::from).collect::<Vec<_>>()
    })))
}

/// Approving generates the manager's credential and mails it; the mail
/// failure is logged, never surfaced. A request can be decided exactly once.
pub async fn decide_request(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Supervisor])?;
    require_fields(&payload, &["approve"])?;

    let req: DecideRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let mut manager = state.manager_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Manager not found".into()))?;

    if !manager.is_pending() {
        return Err(ApiError::Conflict("This signup request has already been decided".into()));
    }

    manager.decided_at = Some(Utc::now());
    manager.decided_by = Some(claims.sub.clone());

    if req.approve {
        let password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| ApiError::Internal("password hashing failed".into()))?
            .to_string();

        manager.password_hash = Some(password_hash);
        manager.approved = Some(true);
        let updated = state.manager_repo.update(&manager).await?;

        let body = format!(
            "<p>Hi {},</p><p>Your manager account has been approved.</p><p>Email: {}</p><p>Password: {}</p>",
            updated.name, updated.email, password
        );
        if let Err(e) = state.email_service
            .send(&updated.email, "Your manager account has been approved", &body)
            .await
        {
            error!("Failed to send approval email to {}: {}", updated.email, e);
        }

        info!("Manager {} approved by {}", updated.id, claims.sub);

        Ok(Json(json!({
            "success": true,
            "message": "Signup request approved"
        })))
    } else {
        manager.approved = Some(false);
        let updated = state.manager_repo.update(&manager).await?;

        info!("Manager {} denied by {}", updated.id, claims.sub);

        Ok(Json(json!({
            "success": true,
            "message": "Signup request denied"
        })))
    }
}
