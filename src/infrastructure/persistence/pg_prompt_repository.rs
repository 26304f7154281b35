use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{PromptRepository, RepositoryError};
use crate::domain::{PromptKind, PromptTemplate};

use super::query_err;

pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    #[instrument(skip(self), fields(kind = %kind))]
    async fn get(&self, kind: PromptKind) -> Result<Option<PromptTemplate>, RepositoryError> {
        let row = sqlx::query(
            "SELECT prompt_text, updated_at FROM system_prompts WHERE prompt_type = $1",
        )
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_err)?;

        match row {
            Some(r) => {
                let text: String = r.try_get("prompt_text").map_err(query_err)?;
                let updated_at: DateTime<Utc> = r.try_get("updated_at").map_err(query_err)?;
                Ok(Some(PromptTemplate {
                    kind,
                    text,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, template), fields(kind = %template.kind))]
    async fn upsert(&self, template: &PromptTemplate) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO system_prompts (id, prompt_type, prompt_text, updated_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (prompt_type) DO UPDATE \
             SET prompt_text = EXCLUDED.prompt_text, updated_at = EXCLUDED.updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(template.kind.as_str())
        .bind(&template.text)
        .bind(template.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_err)?;

        Ok(())
    }
}
