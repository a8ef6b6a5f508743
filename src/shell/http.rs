use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::modules::reservations::adapters::outbound::event_records::EventRecordStoreError;
use crate::modules::reservations::use_cases::errors::ApplicationError;
use crate::modules::reservations::use_cases::list_reservations_by_user::inbound::http as list_http;
use crate::modules::reservations::use_cases::manage_events::inbound::http as events_http;
use crate::modules::reservations::use_cases::release_seat::inbound::http as release_http;
use crate::modules::reservations::use_cases::reserve_seat::inbound::http as reserve_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(events_http::create))
        .route(
            "/events/{event_id}",
            get(events_http::roster).delete(events_http::delete),
        )
        .route("/events/{event_id}/rsvp", post(reserve_http::handle))
        .route("/events/{event_id}/cancel", post(release_http::handle))
        .route("/users/{user_id}/reservations", get(list_http::handle))
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Maps infrastructure failures onto HTTP. Business outcomes never get here.
pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::StoreUnavailable(EventRecordStoreError::AlreadyExists(_)) => {
            StatusCode::CONFLICT
        }
        ApplicationError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::OutcomeUnknown { .. } => StatusCode::GATEWAY_TIMEOUT,
        ApplicationError::InvalidCapacity => StatusCode::UNPROCESSABLE_ENTITY,
    };
    if status.is_server_error() {
        tracing::error!(%error, "request failed");
    }
    (
        status,
        Json(ErrorBody {
            message: error.to_string(),
        }),
    )
        .into_response()
}
