use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{requests::CreateReportRequest, responses::ReportView};
use crate::api::extractors::auth::AuthUser;
use crate::api::validation::require_fields;
use crate::domain::models::auth::Role;
use crate::domain::models::report::Report;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_report(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Participant])?;
    require_fields(&payload, &["title", "description"])?;

    let req: CreateReportRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::Rejection(format!("Invalid request body: {}", e)))?;

    let report = Report::new(claims.sub.clone(), req.title, req.description);
    let created = state.report_repo.create(&report).await?;

    info!("Report filed: {} by {}", created.id, claims.sub);

    Ok(Json(json!({
        "success": true,
        "message": "Report submitted",
        "report": ReportView::from(&created)
    })))
}

pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    claims.require(&[Role::Supervisor])?;

    let reports = state.report_repo.list().await?;

    Ok(Json(json!({
        "success": true,
        "reports": reports.iter().map(ReportView::from).collect::<Vec<_>>()
    })))
}
