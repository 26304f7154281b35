use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::{AnalysisError, RunConfig};
use crate::domain::{AudioFile, SpeechProvider, TextProvider};
use crate::presentation::auth::MaybeUser;
use crate::presentation::state::{AppState, RegistryProgress, RunState};

use super::ErrorResponse;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub run_id: String,
    pub report_id: String,
    pub audio_upload_id: String,
    pub provider: String,
    pub content: String,
    pub created_at: String,
}

/// Runs the upload-to-report pipeline for one multipart request. The
/// optional `run_id` field lets the browser poll `/api/v1/runs/{run_id}`
/// for progress while this request is still in flight.
#[tracing::instrument(skip_all)]
pub async fn create_analysis_handler(
    State(state): State<AppState>,
    MaybeUser(owner): MaybeUser,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<AudioFile> = None;
    let mut speech_provider = SpeechProvider::OpenAi;
    let mut text_provider = TextProvider::OpenAi;
    let mut run_id: Option<Uuid> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("audio").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return bad_request(format!("Failed to read file: {}", e));
                    }
                };
                file = Some(AudioFile::new(file_name, data));
            }
            Some("speech_provider") => match read_text_field(field).await {
                Ok(value) => match SpeechProvider::from_str(&value) {
                    Ok(provider) => speech_provider = provider,
                    Err(e) => return bad_request(e),
                },
                Err(response) => return response,
            },
            Some("text_provider") => match read_text_field(field).await {
                Ok(value) => match TextProvider::from_str(&value) {
                    Ok(provider) => text_provider = provider,
                    Err(e) => return bad_request(e),
                },
                Err(response) => return response,
            },
            Some("run_id") => match read_text_field(field).await {
                Ok(value) => match Uuid::parse_str(&value) {
                    Ok(id) => run_id = Some(id),
                    Err(_) => return bad_request(format!("Invalid run id: {}", value)),
                },
                Err(response) => return response,
            },
            _ => continue,
        }
    }

    let run_id = run_id.unwrap_or_else(Uuid::new_v4);
    state.runs.begin(run_id);
    let sink = RegistryProgress::new(Arc::clone(&state.runs), run_id);

    let config = RunConfig {
        owner,
        speech_provider,
        text_provider,
    };

    match state.analysis_service.run(file, config, &sink).await {
        Ok(report) => {
            state.runs.finish(run_id, RunState::Succeeded, "report ready");
            (
                StatusCode::CREATED,
                Json(AnalysisResponse {
                    run_id: run_id.to_string(),
                    report_id: report.id.as_uuid().to_string(),
                    audio_upload_id: report.audio_upload_id.as_uuid().to_string(),
                    provider: report.provider_used.as_str().to_string(),
                    content: report.content,
                    created_at: report.created_at.to_rfc3339(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Analysis run failed");
            let message = e.to_string();
            state.runs.finish(run_id, RunState::Failed, &message);
            (status_for(&e), Json(ErrorResponse { error: message })).into_response()
        }
    }
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<String, axum::response::Response> {
    field
        .text()
        .await
        .map_err(|e| bad_request(format!("Failed to read field: {}", e)))
}

fn bad_request(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::Unauthenticated => StatusCode::UNAUTHORIZED,
        AnalysisError::MissingConfiguration(_) | AnalysisError::MissingCredential(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AnalysisError::NoFileSelected => StatusCode::BAD_REQUEST,
        AnalysisError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AnalysisError::Storage(_)
        | AnalysisError::Transcription(_)
        | AnalysisError::Completion { .. } => StatusCode::BAD_GATEWAY,
        AnalysisError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
