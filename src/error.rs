use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Missing credential")]
    MissingCredential,
    #[error("Invalid credential")]
    InvalidCredential,
    #[error("Forbidden")]
    Forbidden,
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotOwner(String),
    #[error("You are not invited to this event")]
    NotInvited,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Rejection(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::OK,
                            Json(json!({
                                "success": false,
                                "message": "Resource already exists (duplicate entry)"
                            }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::NOT_IMPLEMENTED, format!("Internal error: {}", e))
            }
            ApiError::MissingCredential => (StatusCode::UNAUTHORIZED, "Missing credential".to_string()),
            ApiError::InvalidCredential => (StatusCode::UNAUTHORIZED, "Invalid credential".to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "You don't have permission to access this resource".to_string()),
            ApiError::MissingField(name) => (StatusCode::BAD_REQUEST, format!("Missing required field: {}", name)),
            ApiError::NotFound(msg) => (StatusCode::OK, msg.clone()),
            ApiError::NotOwner(msg) => (StatusCode::OK, msg.clone()),
            ApiError::NotInvited => (StatusCode::OK, "You are not invited to this event".to_string()),
            ApiError::Conflict(msg) => (StatusCode::OK, msg.clone()),
            ApiError::Rejection(msg) => (StatusCode::OK, msg.clone()),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::NOT_IMPLEMENTED, format!("Internal error: {}", msg))
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}
