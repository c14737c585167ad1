use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, manager, private_event, public_event, report, supervisor, user};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Participant accounts
        .route("/v1/users", post(user::register))
        .route("/v1/users/login", post(user::login))
        .route("/v1/users/me", get(user::me))

        // Manager signup & login
        .route("/v1/managers", post(manager::signup))
        .route("/v1/managers/login", post(manager::login))

        // Supervisor approval flow
        .route("/v1/supervisors/login", post(supervisor::login))
        .route("/v1/supervisors/requests", get(supervisor::list_requests))
        .route("/v1/supervisors/requests/{id}", put(supervisor::decide_request))

        // Private events & invitations
        .route("/v1/private-events", get(private_event::list_mine).post(private_event::create_event))
        .route("/v1/private-events/{id}", get(private_event::get_event).put(private_event::update_event).delete(private_event::delete_event))
        .route("/v1/private-events/{id}/invite", put(private_event::invite))
        .route("/v1/private-events/{id}/responde", put(private_event::respond))

        // Public events
        .route("/v1/events", get(public_event::list_events).post(public_event::create_event))
        .route("/v1/events/{id}", get(public_event::get_event).put(public_event::update_event).delete(public_event::delete_event))

        // Reports
        .route("/v1/reports", get(report::list_reports).post(report::create_report))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
