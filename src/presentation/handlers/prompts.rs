use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{PromptKind, PromptTemplate};
use crate::presentation::auth::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct UpdatePromptRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct PromptResponse {
    pub prompt_type: String,
    pub text: String,
    pub updated_at: String,
}

impl From<&PromptTemplate> for PromptResponse {
    fn from(template: &PromptTemplate) -> Self {
        Self {
            prompt_type: template.kind.as_str().to_string(),
            text: template.text.clone(),
            updated_at: template.updated_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, _user))]
pub async fn get_prompt_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(prompt_type): Path<String>,
) -> impl IntoResponse {
    let kind = match PromptKind::from_str(&prompt_type) {
        Ok(kind) => kind,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state.prompts.get(kind).await {
        Ok(Some(template)) => {
            (StatusCode::OK, Json(PromptResponse::from(&template))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No {} prompt is configured", kind),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch prompt");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch prompt: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, _user, request))]
pub async fn update_prompt_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(prompt_type): Path<String>,
    Json(request): Json<UpdatePromptRequest>,
) -> impl IntoResponse {
    let kind = match PromptKind::from_str(&prompt_type) {
        Ok(kind) => kind,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    if request.text.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Prompt text must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let template = PromptTemplate::new(kind, request.text);
    match state.prompts.upsert(&template).await {
        Ok(()) => (StatusCode::OK, Json(PromptResponse::from(&template))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to update prompt");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to update prompt: {}", e),
                }),
            )
                .into_response()
        }
    }
}
