use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::Provider;
use crate::presentation::auth::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct UpdateCredentialRequest {
    pub secret: String,
}

#[derive(Serialize)]
pub struct CredentialListResponse {
    pub providers: Vec<String>,
}

/// Lists which providers the user has keys for. Secrets never leave the
/// credential store through this surface.
#[tracing::instrument(skip(state, user))]
pub async fn list_credentials_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    match state.credentials.providers_for_owner(user.0).await {
        Ok(providers) => (
            StatusCode::OK,
            Json(CredentialListResponse {
                providers: providers.iter().map(|p| p.as_str().to_string()).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list credentials");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list credentials: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, user, request))]
pub async fn update_credential_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(provider): Path<String>,
    Json(request): Json<UpdateCredentialRequest>,
) -> impl IntoResponse {
    let provider = match Provider::from_str(&provider) {
        Ok(provider) => provider,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    if request.secret.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Secret must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .credentials
        .upsert(user.0, provider, &request.secret)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to store credential");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to store credential: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, user))]
pub async fn delete_credential_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(provider): Path<String>,
) -> impl IntoResponse {
    let provider = match Provider::from_str(&provider) {
        Ok(provider) => provider,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state.credentials.delete(user.0, provider).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete credential");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to delete credential: {}", e),
                }),
            )
                .into_response()
        }
    }
}
