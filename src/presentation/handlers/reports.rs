use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{InsightReport, ReportId};
use crate::presentation::auth::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ReportSummary {
    pub id: String,
    pub audio_upload_id: String,
    pub provider: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub audio_upload_id: String,
    pub provider: String,
    pub content: String,
    pub created_at: String,
}

impl From<&InsightReport> for ReportSummary {
    fn from(report: &InsightReport) -> Self {
        Self {
            id: report.id.as_uuid().to_string(),
            audio_upload_id: report.audio_upload_id.as_uuid().to_string(),
            provider: report.provider_used.as_str().to_string(),
            created_at: report.created_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, user))]
pub async fn list_reports_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    match state.reports.list_for_owner(user.0).await {
        Ok(reports) => {
            let summaries: Vec<ReportSummary> = reports.iter().map(ReportSummary::from).collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list reports");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list reports: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, user))]
pub async fn get_report_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(report_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&report_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid report ID: {}", report_id),
                }),
            )
                .into_response();
        }
    };

    match state
        .reports
        .get_for_owner(ReportId::from_uuid(uuid), user.0)
        .await
    {
        Ok(Some(report)) => (
            StatusCode::OK,
            Json(ReportResponse {
                id: report.id.as_uuid().to_string(),
                audio_upload_id: report.audio_upload_id.as_uuid().to_string(),
                provider: report.provider_used.as_str().to_string(),
                content: report.content,
                created_at: report.created_at.to_rfc3339(),
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Report not found: {}", report_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch report: {}", e),
                }),
            )
                .into_response()
        }
    }
}
