use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<String>) -> impl IntoResponse {
    match state.queries.list_by_user_id(&user_id).await {
        Ok(memberships) => Json(memberships).into_response(),
        Err(error) => {
            tracing::warn!(user_id = %user_id, %error, "membership index read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
