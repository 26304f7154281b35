use async_trait::async_trait;

use crate::domain::{CredentialSet, Provider, UserId};

use super::repository_error::RepositoryError;

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Replaces the single credential for the (owner, provider) pair.
    async fn upsert(
        &self,
        owner: UserId,
        provider: Provider,
        secret: &str,
    ) -> Result<(), RepositoryError>;

    async fn delete(&self, owner: UserId, provider: Provider) -> Result<(), RepositoryError>;

    /// Which providers the owner has keys for; secrets are never listed.
    async fn providers_for_owner(&self, owner: UserId) -> Result<Vec<Provider>, RepositoryError>;

    async fn credentials_for_owner(&self, owner: UserId)
    -> Result<CredentialSet, RepositoryError>;
}
