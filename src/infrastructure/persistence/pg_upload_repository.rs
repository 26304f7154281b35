use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, UploadRepository};
use crate::domain::{AudioUpload, StoragePath, UploadId, UserId};

use super::query_err;

pub struct PgUploadRepository {
    pool: PgPool,
}

impl PgUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_upload(row: &PgRow) -> Result<AudioUpload, RepositoryError> {
    let id: Uuid = row.try_get("id").map_err(query_err)?;
    let user_id: Uuid = row.try_get("user_id").map_err(query_err)?;
    let file_path: String = row.try_get("file_path").map_err(query_err)?;
    let duration_sec: i32 = row.try_get("duration_sec").map_err(query_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(query_err)?;

    Ok(AudioUpload {
        id: UploadId::from_uuid(id),
        owner_id: UserId::from_uuid(user_id),
        storage_path: StoragePath::from_raw(file_path),
        duration_seconds: duration_sec,
        created_at,
    })
}

#[async_trait]
impl UploadRepository for PgUploadRepository {
    #[instrument(skip(self, upload), fields(upload_id = %upload.id.as_uuid()))]
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO audio_uploads (id, user_id, file_path, duration_sec, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(upload.id.as_uuid())
        .bind(upload.owner_id.as_uuid())
        .bind(upload.storage_path.as_str())
        .bind(upload.duration_seconds)
        .bind(upload.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_err)?;

        Ok(())
    }

    #[instrument(skip(self), fields(upload_id = %id.as_uuid()))]
    async fn get(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, user_id, file_path, duration_sec, created_at \
             FROM audio_uploads WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_err)?;

        row.as_ref().map(row_to_upload).transpose()
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<AudioUpload>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_id, file_path, duration_sec, created_at \
             FROM audio_uploads WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_err)?;

        rows.iter().map(row_to_upload).collect()
    }
}
