use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{CreatePublicEventRequest, UpdatePublicEventRequest},
    responses::PublicEventView,
};
use crate::api::extractors::auth::AuthUser;
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::domain::models::public_event::PublicEvent;
use crate::error::ApiError;
use crate::state::AppState;

fn validate_dates(init_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Result<(), ApiError> {
    if end_date < init_date {
        return Err(ApiError::Rejection("You can't end an event before it started".into()));
    }
    Ok(())
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Manager])?;
    require_fields(&payload, &["initDate", "endDate", "description"])?;

    let req: CreatePublicEventRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    validate_dates(req.init_date, req.end_date)?;
    if req.init_date < Utc::now() {
        return Err(ApiError::Rejection("You can't create an event in the past".into()));
    }

    let cost = req.cost.unwrap_or(0.0);
    if cost < 0.0 {
        return Err(ApiError::Rejection("Cost can't be negative".into()));
    }

    let address = req.address.unwrap_or_default();
    let event = PublicEvent::new(
        claims.sub.clone(),
        req.init_date,
        req.end_date,
        address.country.unwrap_or_default(),
        address.city.unwrap_or_default(),
        address.street.unwrap_or_default(),
        address.number.unwrap_or_default(),
        address.postal_code.unwrap_or_default(),
        cost,
        req.description,
        &req.photos.unwrap_or_default(),
    );

    let created = state.public_event_repo.create(&event).await?;
    info!("Public event created: {} by manager {}", created.id, claims.sub);

    Ok(Json(json!({
        "success": true,
        "message": "Event created",
        "event": PublicEventView::from(&created)
    })))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant, Role::Manager, Role::Supervisor])?;

    let events = state.public_event_repo.list().await?;

    Ok(Json(json!({
        "success": true,
        "events": events.iter().map(PublicEventView::from).collect::<Vec<_>>()
    })))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant, Role::Manager, Role::Supervisor])?;

    let event = state.public_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    Ok(Json(json!({
        "success": true,
        "event": PublicEventView::from(&event)
    })))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Manager])?;
    require_fields(&payload, &["initDate", "endDate", "description"])?;

    let req: UpdatePublicEventRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let mut event = state.public_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    if event.manager_id != claims.sub {
        return Err(ApiError::NotOwner("You are not the owner of this event".into()));
    }

    validate_dates(req.init_date, req.end_date)?;
    let cost = req.cost.unwrap_or(0.0);
    if cost < 0.0 {
        return Err(ApiError::Rejection("Cost can't be negative".into()));
    }

    let address = req.address.unwrap_or_default();
    event.init_date = req.init_date;
    event.end_date = req.end_date;
    event.country = address.country.unwrap_or_default();
    event.city = address.city.unwrap_or_default();
    event.street = address.street.unwrap_or_default();
    event.number = address.number.unwrap_or_default();
    event.postal_code = address.postal_code.unwrap_or_default();
    event.cost = cost;
    event.description = req.description;

    let updated = state.public_event_repo.update(&event).await?;
    info!("Public event updated: {}", updated.id);

    Ok(Json(json!({
        "success": true,
        "message": "Event updated",
        "event": PublicEventView::from(&updated)
    })))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Manager])?;

    let event = state.public_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    if event.manager_id != claims.sub {
        return Err(ApiError::NotOwner("You are not the owner of this event".into()));
    }

    state.public_event_repo.delete(&event.id).await?;
    info!("Public event deleted: {}", event.id);

    Ok(Json(json!({
        "success": true,
        "message": "Event deleted"
    })))
}
