use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dtos::{
    requests::{CreatePrivateEventRequest, InviteRequest, RespondRequest, UpdatePrivateEventRequest},
    responses::{InvitationView, ParticipantSummary, PrivateEventView},
};
use crate::api::extractors::auth::AuthUser;
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::domain::models::participant::Participant;
use crate::domain::models::private_event::{InviteStatus, PrivateEvent};
use crate::domain::services::validation;
use crate::error::ApiError;
use crate::state::AppState;

const MAX_DESCRIPTION_CHARS: usize = 300;

fn validate_event_fields(init_date: DateTime<Utc>, end_date: DateTime<Utc>, description: &str, cost: f64) -> Result<(), ApiError> {
    if end_date < init_date {
        return Err(ApiError::Rejection("You can't end an event before it started".into()));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ApiError::Rejection("Description can't be longer than 300 characters".into()));
    }
    if cost < 0.0 {
        return Err(ApiError::Rejection("Cost can't be negative".into()));
    }
    Ok(())
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;
    require_fields(&payload, &["initDate", "endDate", "description"])?;

    let req: CreatePrivateEventRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let cost = req.cost.unwrap_or(0.0);
    validate_event_fields(req.init_date, req.end_date, &req.description, cost)?;
    if req.init_date < Utc::now() {
        return Err(ApiError::Rejection("You can't create an event in the past".into()));
    }

    let address = req.address.unwrap_or_default();
    let event = PrivateEvent::new(
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

    let created = state.private_event_repo.create(&event).await?;
    info!("Private event created: {} by {}", created.id, claims.sub);

    Ok(Json(json!({
        "success": true,
        "message": "Private event created",
        "event": PrivateEventView::from_event(&created)
    })))
}

/// Two disjoint listings: events the caller created and events the caller was
/// invited to. The invited query excludes creator-owned rows, so no event can
/// show up in both.
pub async fn list_mine(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;

    let created = state.private_event_repo.list_created_by(&claims.sub).await?;
    let invited = state.private_event_repo.list_invited(&claims.sub).await?;

    Ok(Json(json!({
        "success": true,
        "created": created.iter().map(PrivateEventView::from_event).collect::<Vec<_>>(),
        "invited": invited.iter().map(PrivateEventView::from_event).collect::<Vec<_>>(),
    })))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;

    let event = state.private_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Private event not found".into()))?;

    let invitations = state.private_event_repo.list_invitations(&event.id).await?;

    let is_creator = event.creator_id == claims.sub;
    let is_invited = invitations.iter().any(|i| i.participant_id == claims.sub);
    if !is_creator && !is_invited {
        return Err(ApiError::NotOwner("You don't have access to this event".into()));
    }

    let mut participants = Vec::with_capacity(invitations.len());
    for invitation in &invitations {
        // invitee references are weak: a deleted account leaves a bare id
        let participant = state.participant_repo.find_by_id(&invitation.participant_id).await?;
        participants.push(InvitationView {
            participant_id: invitation.participant_id.clone(),
            participant: participant.as_ref().map(ParticipantSummary::from),
            status: invitation.status,
        });
    }

    Ok(Json(json!({
        "success": true,
        "event": PrivateEventView::with_participants(&event, participants)
    })))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;
    require_fields(&payload, &["initDate", "endDate", "description"])?;

    let req: UpdatePrivateEventRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let mut event = state.private_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Private event not found".into()))?;

    if event.creator_id != claims.sub {
        return Err(ApiError::NotOwner("You are not the owner of this event".into()));
    }

    let cost = req.cost.unwrap_or(0.0);
    validate_event_fields(req.init_date, req.end_date, &req.description, cost)?;

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

    let updated = state.private_event_repo.update(&event).await?;
    info!("Private event updated: {}", updated.id);

    Ok(Json(json!({
        "success": true,
        "message": "Private event updated",
        "event": PrivateEventView::from_event(&updated)
    })))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;

    let event = state.private_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Private event not found".into()))?;

    if event.creator_id != claims.sub {
        return Err(ApiError::NotOwner("You are not the owner of this event".into()));
    }

    state.private_event_repo.delete(&event.id).await?;
    info!("Private event deleted: {}", event.id);

    Ok(Json(json!({
        "success": true,
        "message": "Private event deleted"
    })))
}

/// Owner-only. Identifiers resolve as email when email-shaped, as username
/// otherwise; any unresolved identifier rejects the whole request before
/// anything is written. Re-inviting an already-listed participant is a no-op.
pub async fn invite(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;
    require_fields(&payload, &["users"])?;

    let req: InviteRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let event = state.private_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Private event not found".into()))?;

    if event.creator_id != claims.sub {
        return Err(ApiError::NotOwner("You are not the owner of this event".into()));
    }

    if req.users.is_empty() {
        return Err(ApiError::Rejection("No users to invite".into()));
    }

    let mut targets: Vec<Participant> = Vec::new();
    for identifier in &req.users {
        let resolved = if validation::looks_like_email(identifier) {
            state.participant_repo.find_by_email(identifier).await?
        } else {
            state.participant_repo.find_by_username(identifier).await?
        };

        let participant = resolved
            .ok_or_else(|| ApiError::NotFound(format!("Participant not found: {}", identifier)))?;

        if participant.id == event.creator_id {
            return Err(ApiError::Rejection("You can't invite yourself".into()));
        }
        if !targets.iter().any(|t| t.id == participant.id) {
            targets.push(participant);
        }
    }

    let ids: Vec<String> = targets.iter().map(|t| t.id.clone()).collect();
    let added = state.private_event_repo.add_invitees(&event.id, &ids).await?;

    for participant in targets.iter().filter(|t| added.contains(&t.id)) {
        let body = format!(
            "<p>Hi {},</p><p>You have been invited to a private event on {}.</p>",
            participant.name,
            event.init_date.format("%Y-%m-%d %H:%M")
        );
        if let Err(e) = state.email_service
            .send(&participant.email, "You have been invited to a private event", &body)
            .await
        {
            error!("Failed to send invitation email to {}: {}", participant.email, e);
        }
    }

    info!("Invited {} participant(s) to event {}", added.len(), event.id);

    Ok(Json(json!({
        "success": true,
        "message": "Invitations sent",
        "invited": added.len()
    })))
}

/// Invitee-only. The transition is guarded on Pending, so a response never
/// overwrites an earlier one.
pub async fn respond(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;
    require_fields(&payload, &["accept"])?;

    let req: RespondRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let event = state.private_event_repo.find_by_id(&id).await?
        .ok_or_else(|| ApiError::NotFound("Private event not found".into()))?;

    let status = if req.accept { InviteStatus::Accepted } else { InviteStatus::Denied };
    let transitioned = state.private_event_repo
        .set_invitation_status(&event.id, &claims.sub, status)
        .await?;

    if !transitioned {
        return match state.private_event_repo.find_invitation(&event.id, &claims.sub).await? {
            None => Err(ApiError::NotInvited),
            Some(_) => Err(ApiError::Conflict("You have already responded to this invitation".into())),
        };
    }

    info!("Participant {} responded {} to event {}", claims.sub, status.as_str(), event.id);

    Ok(Json(json!({
        "success": true,
        "message": if req.accept { "Invitation accepted" } else { "Invitation denied" }
    })))
}
