use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// Verified bearer identity. Missing/malformed header and bad/expired tokens
/// are distinct 401 kinds; role checks happen in the handlers.
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(header::AUTHORIZATION)
            .ok_or(ApiError::MissingCredential)?
            .to_str()
            .map_err(|_| ApiError::MissingCredential)?;

        let token = header_value.strip_prefix("Bearer ")
            .ok_or(ApiError::MissingCredential)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify(token)?;

        Span::current().record("user_id", claims.sub.as_str());

        Ok(AuthUser(claims))
    }
}
