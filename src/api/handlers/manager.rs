use axum::{extract::State, response::IntoResponse, Json};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{requests::{EmailLoginRequest, ManagerSignupRequest}, responses::ManagerView};
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::domain::models::manager::{Manager, LOCAL_TYPES};
use crate::domain::services::validation;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&payload, &["name", "email", "localType"])?;

    let req: ManagerSignupRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    if !validation::looks_like_email(&req.email) {
        return Err(ApiError::Rejection("Invalid email address".into()));
    }
    if !LOCAL_TYPES.contains(&req.local_type.as_str()) {
        return Err(ApiError::Rejection("Invalid localType".into()));
    }

    if state.manager_repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let address = req.address.unwrap_or_default();
    let manager = Manager::new(
        req.name,
        req.email,
        address.country.unwrap_or_default(),
        address.city.unwrap_or_default(),
        address.street.unwrap_or_default(),
        address.number.unwrap_or_default(),
        address.postal_code.unwrap_or_default(),
        req.local_type,
    );
    let created = state.manager_repo.create(&manager).await?;

    info!("Manager signup request submitted: {}", created.id);

    Ok(Json(json!({
        "success": true,
        "message": "Signup request submitted",
        "manager": ManagerView::from(&created)
    })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(&payload, &["email", "password"])?;

    let req: EmailLoginRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let manager = state.manager_repo.find_by_email(&req.email).await?
        .ok_or_else(|| ApiError::Rejection("Wrong email or password".into()))?;

    match manager.approved {
        Some(true) => {}
        Some(false) => return Err(ApiError::Rejection("Your signup request was denied".into())),
        None => return Err(ApiError::Rejection("Your signup request has not been decided yet".into())),
    }

    let hash = manager.password_hash.as_deref()
        .ok_or_else(|| ApiError::Internal(format!("approved manager {} has no credential", manager.id)))?;

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("stored password hash is invalid".into()))?;
    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Rejection("Wrong email or password".into()))?;

    let token = state.auth_service.issue(&manager.id, Role::Manager)?;

    info!("Manager logged in: {}", manager.id);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
        "manager": ManagerView::from(&manager)
    })))
}
