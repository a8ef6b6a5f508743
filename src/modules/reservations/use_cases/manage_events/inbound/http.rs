use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::reservations::use_cases::manage_events::command::{CreateEvent, DeleteEvent};
use crate::shared::core::primitives::EventId;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub capacity: u32,
}

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub event_id: String,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .events_handler
        .create(CreateEvent {
            capacity: body.capacity,
        })
        .await
    {
        Ok(event_id) => (
            StatusCode::CREATED,
            Json(CreateEventResponse {
                event_id: event_id.to_string(),
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn roster(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match state.events_handler.roster(&EventId::new(event_id)).await {
        Ok(Some(snapshot)) => Json(snapshot).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn delete(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match state.events_handler.delete(DeleteEvent::new(event_id)).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => error_response(error),
    }
}
