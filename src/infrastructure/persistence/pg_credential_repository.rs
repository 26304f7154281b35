use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{CredentialRepository, RepositoryError};
use crate::domain::{CredentialSet, Provider, UserId};

use super::query_err;

/// Credentials live in the `api_keys` table; the `key_hash` column carries
/// the secret as stored by the settings screen, opaque to this service.
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    #[instrument(skip(self, secret), fields(owner_id = %owner.as_uuid(), provider = %provider))]
    async fn upsert(
        &self,
        owner: UserId,
        provider: Provider,
        secret: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO api_keys (id, provider, key_hash, created_by) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (created_by, provider) DO UPDATE SET key_hash = EXCLUDED.key_hash",
        )
        .bind(Uuid::new_v4())
        .bind(provider.as_str())
        .bind(secret)
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_err)?;

        Ok(())
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid(), provider = %provider))]
    async fn delete(&self, owner: UserId, provider: Provider) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM api_keys WHERE created_by = $1 AND provider = $2")
            .bind(owner.as_uuid())
            .bind(provider.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(())
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    async fn providers_for_owner(&self, owner: UserId) -> Result<Vec<Provider>, RepositoryError> {
        let rows =
            sqlx::query("SELECT provider FROM api_keys WHERE created_by = $1 ORDER BY provider")
                .bind(owner.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(query_err)?;

        rows.iter()
            .map(|row| {
                let provider: String = row.try_get("provider").map_err(query_err)?;
                Provider::from_str(&provider).map_err(RepositoryError::QueryFailed)
            })
            .collect()
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    async fn credentials_for_owner(
        &self,
        owner: UserId,
    ) -> Result<CredentialSet, RepositoryError> {
        let rows = sqlx::query("SELECT provider, key_hash FROM api_keys WHERE created_by = $1")
            .bind(owner.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(query_err)?;

        let mut credentials = CredentialSet::new();
        for row in rows {
            let provider: String = row.try_get("provider").map_err(query_err)?;
            let secret: String = row.try_get("key_hash").map_err(query_err)?;
            let provider = Provider::from_str(&provider).map_err(RepositoryError::QueryFailed)?;
            credentials.insert(provider, secret);
        }

        Ok(credentials)
    }
}
