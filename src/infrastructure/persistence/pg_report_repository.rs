use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ReportRepository, RepositoryError};
use crate::domain::{InsightReport, ReportId, TextProvider, UploadId, UserId};

use super::query_err;

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_report(row: &PgRow) -> Result<InsightReport, RepositoryError> {
    let id: Uuid = row.try_get("id").map_err(query_err)?;
    let audio_id: Uuid = row.try_get("audio_id").map_err(query_err)?;
    let report_md: String = row.try_get("report_md").map_err(query_err)?;
    let provider: String = row.try_get("provider").map_err(query_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(query_err)?;

    let provider_used = TextProvider::from_str(&provider).map_err(RepositoryError::QueryFailed)?;

    Ok(InsightReport {
        id: ReportId::from_uuid(id),
        audio_upload_id: UploadId::from_uuid(audio_id),
        content: report_md,
        provider_used,
        created_at,
    })
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self, report), fields(report_id = %report.id.as_uuid()))]
    async fn create(&self, report: &InsightReport) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO insight_reports (id, audio_id, report_md, provider, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(report.id.as_uuid())
        .bind(report.audio_upload_id.as_uuid())
        .bind(&report.content)
        .bind(report.provider_used.as_str())
        .bind(report.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_err)?;

        Ok(())
    }

    #[instrument(skip(self), fields(report_id = %id.as_uuid(), owner_id = %owner.as_uuid()))]
    async fn get_for_owner(
        &self,
        id: ReportId,
        owner: UserId,
    ) -> Result<Option<InsightReport>, RepositoryError> {
        let row = sqlx::query(
            "SELECT r.id, r.audio_id, r.report_md, r.provider, r.created_at \
             FROM insight_reports r \
             JOIN audio_uploads a ON a.id = r.audio_id \
             WHERE r.id = $1 AND a.user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_err)?;

        row.as_ref().map(row_to_report).transpose()
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<InsightReport>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT r.id, r.audio_id, r.report_md, r.provider, r.created_at \
             FROM insight_reports r \
             JOIN audio_uploads a ON a.id = r.audio_id \
             WHERE a.user_id = $1 ORDER BY r.created_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_err)?;

        rows.iter().map(row_to_report).collect()
    }
}
