use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::reservations::core::record::RosterSnapshot;
use crate::modules::reservations::use_cases::release_seat::command::ReleaseSeat;
use crate::modules::reservations::use_cases::release_seat::decision::{
    ReleaseOutcome, ReleaseStatus,
};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReleaseSeatBody {
    pub user_id: String,
}

#[derive(Serialize)]
pub struct ReleaseSeatResponse {
    pub status: ReleaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<RosterSnapshot>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ReleaseSeatBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.user_id.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    match state
        .release_handler
        .handle(ReleaseSeat::new(event_id, body.user_id))
        .await
    {
        Ok(outcome) => {
            let status = outcome.status();
            match outcome {
                ReleaseOutcome::Released(snapshot) => (
                    StatusCode::OK,
                    Json(ReleaseSeatResponse {
                        status,
                        event: Some(snapshot),
                    }),
                )
                    .into_response(),
                ReleaseOutcome::EventNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(ReleaseSeatResponse {
                        status,
                        event: None,
                    }),
                )
                    .into_response(),
            }
        }
        Err(error) => error_response(error),
    }
}
