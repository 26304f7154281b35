use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::auth::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub file_path: String,
    pub duration_seconds: i32,
    pub created_at: String,
}

#[tracing::instrument(skip(state, user))]
pub async fn list_uploads_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    match state.uploads.list_for_owner(user.0).await {
        Ok(uploads) => {
            let uploads: Vec<UploadResponse> = uploads
                .iter()
                .map(|upload| UploadResponse {
                    id: upload.id.as_uuid().to_string(),
                    file_path: upload.storage_path.as_str().to_string(),
                    duration_seconds: upload.duration_seconds,
                    created_at: upload.created_at.to_rfc3339(),
                })
                .collect();
            (StatusCode::OK, Json(uploads)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list uploads");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list uploads: {}", e),
                }),
            )
                .into_response()
        }
    }
}
