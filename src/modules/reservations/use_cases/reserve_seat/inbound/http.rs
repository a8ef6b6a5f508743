use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::reservations::core::record::RosterSnapshot;
use crate::modules::reservations::use_cases::reserve_seat::command::ReserveSeat;
use crate::modules::reservations::use_cases::reserve_seat::decision::{
    RejectionReason, ReserveOutcome, ReserveStatus,
};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReserveSeatBody {
    pub user_id: String,
}

#[derive(Serialize)]
pub struct ReserveSeatResponse {
    pub status: ReserveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<RosterSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ReserveSeatBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.user_id.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let command = ReserveSeat::new(event_id, body.user_id);
    match state.reserve_handler.reserve_with_retry(command).await {
        Ok(outcome) => outcome_response(outcome),
        Err(error) => error_response(error),
    }
}

fn outcome_response(outcome: ReserveOutcome) -> Response {
    let status = outcome.status();
    match outcome {
        ReserveOutcome::Admitted(snapshot) => (
            StatusCode::OK,
            Json(ReserveSeatResponse {
                status,
                event: Some(snapshot),
                message: None,
            }),
        )
            .into_response(),
        ReserveOutcome::Rejected(reason) => {
            let code = match reason {
                RejectionReason::EventNotFound => StatusCode::NOT_FOUND,
                RejectionReason::AlreadyReserved
                | RejectionReason::Full
                | RejectionReason::Contended => StatusCode::CONFLICT,
            };
            (
                code,
                Json(ReserveSeatResponse {
                    status,
                    event: None,
                    message: Some(reason.to_string()),
                }),
            )
                .into_response()
        }
    }
}
