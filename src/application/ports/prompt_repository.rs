use async_trait::async_trait;

use crate::domain::{PromptKind, PromptTemplate};

use super::repository_error::RepositoryError;

#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn get(&self, kind: PromptKind) -> Result<Option<PromptTemplate>, RepositoryError>;

    /// Replaces the single active template for the kind.
    async fn upsert(&self, template: &PromptTemplate) -> Result<(), RepositoryError>;
}
