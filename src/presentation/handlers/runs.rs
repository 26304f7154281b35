use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::presentation::state::AppState;

use super::ErrorResponse;

#[tracing::instrument(skip(state))]
pub async fn run_status_handler(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&run_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid run ID: {}", run_id),
                }),
            )
                .into_response();
        }
    };

    match state.runs.get(uuid) {
        Some(progress) => (StatusCode::OK, Json(progress)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Run not found: {}", run_id),
            }),
        )
            .into_response(),
    }
}
