use axum::{extract::State, response::IntoResponse, Json};
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{requests::{LoginRequest, RegisterUserRequest}, responses::ParticipantProfile};
use crate::api::extractors::auth::AuthUser;
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::domain::models::participant::{Credential, Participant};
use crate::domain::services::validation;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&payload, &["name", "surname", "username", "email"])?;

    let req: RegisterUserRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    if !validation::looks_like_email(&req.email) {
        return Err(ApiError::Rejection("Invalid email address".into()));
    }
    if !validation::valid_username(&req.username) {
        return Err(ApiError::Rejection("Username can't be an email address".into()));
    }

    let credential = match (req.password, req.external_id) {
        (Some(password), None) => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| ApiError::Internal("password hashing failed".into()))?
                .to_string();
            Credential::Password { hash }
        }
        (None, Some(provider_id)) => Credential::External { provider_id },
        _ => {
            return Err(ApiError::Rejection(
                "Provide either a password or an external identity, not both".into(),
            ))
        }
    };

    if state.participant_repo.find_by_username(&req.username).await?.is_some() {
        return Err(ApiError::Conflict("Username already exists".into()));
    }
    if state.participant_repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let participant = Participant::new(
        req.name,
        req.surname,
        req.username,
        req.email,
        req.birth_date,
        credential,
    );
    let created = state.participant_repo.create(&participant).await?;

    info!("Participant registered: {}", created.id);

    Ok(Json(json!({
        "success": true,
        "message": "User created",
        "user": ParticipantProfile::from(&created)
    })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&payload, &["username", "password"])?;

    let req: LoginRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let participant = state.participant_repo.find_by_username(&req.username).await?
        .ok_or_else(|| ApiError::Rejection("Wrong username or password".into()))?;

    // external-identity accounts have no local password to check
    let hash = participant.credential.password_hash()
        .ok_or_else(|| ApiError::Rejection("Wrong username or password".into()))?;

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("stored password hash is invalid".into()))?;
    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Rejection("Wrong username or password".into()))?;

    let token = state.auth_service.issue(&participant.id, Role::Participant)?;

    info!("Participant logged in: {}", participant.id);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
        "user": ParticipantProfile::from(&participant)
    })))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    match claims.role {
        Role::Participant => {
            let participant = state.participant_repo.find_by_id(&claims.sub).await?
                .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
            Ok(Json(json!({
                "success": true,
                "role": claims.role,
                "user": ParticipantProfile::from(&participant)
            })))
        }
        Role::Manager => {
            let manager = state.manager_repo.find_by_id(&claims.sub).await?
                .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
            Ok(Json(json!({
                "success": true,
                "role": claims.role,
                "user": crate::api::dtos::responses::ManagerView::from(&manager)
            })))
        }
        Role::Supervisor => {
            let supervisor = state.supervisor_repo.find_by_id(&claims.sub).await?
                .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
            Ok(Json(json!({
                "success": true,
                "role": claims.role,
                "user": { "id": supervisor.id, "name": supervisor.name, "email": supervisor.email }
            })))
        }
    }
}
